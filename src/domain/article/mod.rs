pub mod entity;
pub mod repository;
pub mod services;
pub mod slug;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleFilter, ArticleReadRepository, ArticleWriteRepository, PageWindow};
pub use value_objects::{ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle};
