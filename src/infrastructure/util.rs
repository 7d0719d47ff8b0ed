use crate::application::ports::util::SlugGenerator;
use crate::domain::article::slug::slugify;

/// ASCII-only slugs; see [`slugify`].
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, title: &str) -> String {
        slugify(title)
    }
}
