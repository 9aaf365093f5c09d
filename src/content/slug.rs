//! Slug derivation for content files and heading text

use std::path::Path;

/// Characters dropped from heading text when building an anchor slug
const STRIPPED_PUNCTUATION: &[char] = &['(', ')', '!', '.', ',', '<', '>', '?', '"', '\'', '[', ']', '@'];

/// Derive a content slug from its file path
///
/// The slug is the file name up to its first `.`, so `posts/blog/notes/git-tips.mdx`
/// becomes `git-tips`. Uniqueness is not checked here; one file per slug is
/// kept by the content layout itself.
pub fn slug_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    file_name
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Normalize heading text into an anchor slug
///
/// ```
/// use devfolio::content::slugify;
///
/// assert_eq!(slugify("  What's New? "), "whats-new");
/// ```
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}
