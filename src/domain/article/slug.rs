//! Title to slug transform and the collision probe sequence.
//!
//! Only `[a-z0-9]` survive, separated by single hyphens. Characters outside
//! that set are dropped rather than transliterated, so titles differing only
//! in non-Latin letters or diacritics can share a base slug.

/// Slug used when nothing of the title survives.
pub const FALLBACK_SLUG: &str = "article";

// Matches the ASCII whitespace class `[\t\n\f\r ]`.
const fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0C' | '\r' | '-')
}

pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if is_separator(ch) {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// The `n`-th probe for `base`: `base`, `base-1`, `base-2`, ...
pub fn candidate(base: &str, attempt: u64) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}

/// First candidate for `base` that `exists` reports as free. The predicate is
/// called once per probe; nothing holds the answer stable afterwards.
pub fn ensure_unique(base: &str, mut exists: impl FnMut(&str) -> bool) -> String {
    let mut attempt = 0u64;
    loop {
        let slug = candidate(base, attempt);
        if !exists(&slug) {
            return slug;
        }
        attempt += 1;
    }
}
