//! Copying of source pages to their computed destinations.

use std::fs;
use std::path::{Path, PathBuf};

use docpress_site::PageMapping;

use crate::EmitError;
use crate::frontmatter::FrontMatter;

/// Extensions a source page may carry, in lookup order.
const SOURCE_EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Outcome of one page-writing pass.
#[derive(Debug, Default)]
pub struct PageReport {
    /// Number of pages copied to the output.
    pub written: usize,
    /// One message per page mapping whose source file was not found.
    pub warnings: Vec<String>,
}

/// Copies every mapped page from `source_dir` into `out_dir`.
///
/// Each source is looked up as `{src}.mdx` then `{src}.md`; when `language`
/// is set the language subfolder is tried before the shared root, so
/// translated copies win over shared fallbacks. Copied pages land at
/// `{dest}.mdx` with a title front-matter block injected when absent.
///
/// A mapping without a source file is reported as a warning, not an error;
/// the mapping stays valid and the page is simply not written.
pub fn write_pages(
    source_dir: &Path,
    out_dir: &Path,
    mappings: &[PageMapping],
    language: Option<&str>,
) -> Result<PageReport, EmitError> {
    let front_matter = FrontMatter::new();
    let mut report = PageReport::default();
    for mapping in mappings {
        let Some(source) = find_source(source_dir, &mapping.src, language) else {
            tracing::warn!(src = %mapping.src, "source page not found, skipping copy");
            report
                .warnings
                .push(format!("source page not found: {}", mapping.src));
            continue;
        };
        let dest = out_dir.join(format!("{}.mdx", mapping.dest));
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = fs::read_to_string(&source)?;
        let stem = basename(&mapping.dest);
        fs::write(&dest, front_matter.ensure_title(&content, stem))?;
        report.written += 1;
    }
    Ok(report)
}

/// Locates the source file behind a page reference, if any exists.
fn find_source(source_dir: &Path, src: &str, language: Option<&str>) -> Option<PathBuf> {
    let mut roots = Vec::with_capacity(2);
    if let Some(language) = language {
        roots.push(source_dir.join(language));
    }
    roots.push(source_dir.to_path_buf());
    for root in roots {
        for ext in SOURCE_EXTENSIONS {
            let candidate = root.join(format!("{src}.{ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
