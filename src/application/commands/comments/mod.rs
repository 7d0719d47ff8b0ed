mod add;
mod delete;
mod service;

pub use add::AddCommentCommand;
pub use delete::DeleteCommentCommand;
pub use service::CommentCommandService;
