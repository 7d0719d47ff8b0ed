pub mod articles;
pub mod auth;
pub mod comments;
pub mod pagination;
pub mod profiles;
pub mod serde_time;
pub mod tags;
pub mod users;

pub use articles::{ArticleListView, ArticleView};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::{CommentListView, CommentView};
pub use pagination::PageRequest;
pub use profiles::ProfileView;
pub use tags::TagListView;
pub use users::UserDto;
