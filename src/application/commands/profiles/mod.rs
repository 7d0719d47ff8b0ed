mod follow;
mod service;

pub use follow::FollowProfileCommand;
pub use service::ProfileCommandService;
