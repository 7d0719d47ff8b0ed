mod list;
mod service;

pub use list::ListCommentsQuery;
pub use service::CommentQueryService;
