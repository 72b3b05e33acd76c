//! Slug derivation and sibling-scoped uniqueness.

use std::collections::HashSet;

/// Derives a URL-safe slug from a display label.
///
/// Lowercases the input and replaces every maximal run of characters
/// outside `[a-z0-9]` with a single hyphen; leading and trailing runs are
/// stripped rather than hyphenated. When nothing survives, `fallback` is
/// returned instead.
///
/// # Example
/// ```
/// use docpress_nav::slugify;
///
/// assert_eq!(slugify("Getting Started!", "tab"), "getting-started");
/// assert_eq!(slugify("API & SDK", "tab"), "api-sdk");
/// assert_eq!(slugify("---", "tab"), "tab");
/// ```
#[must_use]
pub fn slugify(input: &str, fallback: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for ch in input.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    if slug.is_empty() {
        fallback.to_owned()
    } else {
        slug
    }
}

/// Allocates slugs that are unique within one sibling scope.
///
/// The first occupant of a base keeps it bare; later requests for the same
/// base are suffixed `-2`, `-3` and so on. Scopes are deliberately small
/// and short-lived: each group's children get a fresh one, independent of
/// the parent's.
#[derive(Debug, Default)]
pub struct SlugScope {
    used: HashSet<String>,
}

impl SlugScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `base` in this scope, appending a numeric suffix when it is
    /// already taken.
    pub fn claim(&mut self, base: &str) -> String {
        if self.used.insert(base.to_owned()) {
            return base.to_owned();
        }
        let mut suffix = 2usize;
        loop {
            let candidate = format!("{base}-{suffix}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
