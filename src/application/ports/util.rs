// src/application/ports/util.rs

/// Turns an article title into the base slug that uniqueness probing starts
/// from. An empty result is replaced by the fallback slug.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, title: &str) -> String;
}
