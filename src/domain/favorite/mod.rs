pub mod repository;

pub use repository::FavoriteRepository;
