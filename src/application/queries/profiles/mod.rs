mod get;
mod service;

pub use get::GetProfileQuery;
pub use service::ProfileQueryService;
