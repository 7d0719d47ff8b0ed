pub mod entity;
pub mod repository;

pub use entity::{Tag, TagId, TagName};
pub use repository::TagRepository;
