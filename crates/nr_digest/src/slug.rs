use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

pub const MAX_SLUG_CHARS: usize = 250;

static NON_ALNUM_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// URL-safe identifier for `text`: decomposed, ASCII only, lowercase,
/// `[a-z0-9]` runs joined by single hyphens, at most 250 characters.
///
/// May return an empty string when nothing ASCII survives.
pub fn slugify(text: &str) -> String {
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();
    let hyphenated = NON_ALNUM_RUN.replace_all(&lowered, "-");
    let mut slug = hyphenated.trim_matches('-').to_string();
    if slug.len() > MAX_SLUG_CHARS {
        slug.truncate(MAX_SLUG_CHARS);
        slug.truncate(slug.trim_end_matches('-').len());
    }
    slug
}
