//! Title front matter for copied pages.

use regex::Regex;

/// Injects a title front-matter block into pages that lack one.
///
/// The title comes from the page's first H1 heading, which is lifted out
/// of the body, or from the filename when no heading exists.
pub(crate) struct FrontMatter {
    h1_regex: Regex,
}

impl FrontMatter {
    /// # Panics
    ///
    /// Panics if the internal regex for H1 heading extraction fails to
    /// compile.
    pub(crate) fn new() -> Self {
        Self {
            h1_regex: Regex::new(r"(?m)^#\s+(.+)$").unwrap(),
        }
    }

    /// Returns `content` opening with a front-matter block. Existing
    /// front matter is left untouched.
    pub(crate) fn ensure_title(&self, content: &str, stem: &str) -> String {
        if content.trim_start().starts_with("---") {
            return content.to_owned();
        }
        let mut title = None;
        let mut body = content.to_owned();
        if let Some(caps) = self.h1_regex.captures(content)
            && let (Some(whole), Some(heading)) = (caps.get(0), caps.get(1))
        {
            title = Some(heading.as_str().trim().to_owned());
            let rest = &content[whole.end()..];
            let mut stripped = String::with_capacity(content.len());
            stripped.push_str(&content[..whole.start()]);
            stripped.push_str(rest.strip_prefix('\n').unwrap_or(rest));
            body = stripped;
        }
        let title = title.unwrap_or_else(|| title_from_stem(stem));
        format!(
            "---\ntitle: {}\n---\n\n{}",
            quoted(&title),
            body.trim_start()
        )
    }
}

/// Title-cases a filename stem: `getting-started` becomes
/// `Getting Started`.
pub(crate) fn title_from_stem(stem: &str) -> String {
    stem.replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quotes a title as a YAML scalar. JSON string syntax is a YAML subset,
/// so this handles embedded quotes and colons without a YAML dependency.
pub(crate) fn quoted(title: &str) -> String {
    serde_json::Value::String(title.to_owned()).to_string()
}
