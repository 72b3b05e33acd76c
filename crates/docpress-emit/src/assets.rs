//! Static-asset copying from the source tree to the output.

use std::fs;
use std::path::Path;

use docpress_config::{DOCUMENT_FILENAME, LEGACY_DOCUMENT_FILENAME};

use crate::EmitError;

/// Copies every non-markdown file under `source_dir` into `out_dir`,
/// preserving relative paths. Returns the number of files copied.
///
/// Hidden and underscore-prefixed names are skipped, as are common build
/// directories and the navigation document itself; markdown sources travel
/// through the page writer, not this copier.
pub fn copy_assets(source_dir: &Path, out_dir: &Path) -> Result<usize, EmitError> {
    copy_dir(source_dir, out_dir, true)
}

fn copy_dir(source: &Path, out: &Path, is_root: bool) -> Result<usize, EmitError> {
    let mut copied = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }
        let is_dir = entry.file_type()?.is_dir();
        if is_dir && is_skipped_dir(&name.to_lowercase()) {
            continue;
        }
        if is_dir {
            copied += copy_dir(&entry.path(), &out.join(name.as_ref()), false)?;
            continue;
        }
        if is_markdown(&name) || (is_root && is_document(&name)) {
            continue;
        }
        fs::create_dir_all(out)?;
        fs::copy(entry.path(), out.join(name.as_ref()))?;
        copied += 1;
    }
    if copied > 0 {
        tracing::debug!(dir = %source.display(), copied, "copied static assets");
    }
    Ok(copied)
}

fn is_skipped_dir(name: &str) -> bool {
    matches!(
        name,
        "node_modules" | "target" | "dist" | "build" | "vendor" | "__pycache__"
    )
}

fn is_markdown(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("mdx"))
}

fn is_document(name: &str) -> bool {
    name == DOCUMENT_FILENAME || name == LEGACY_DOCUMENT_FILENAME
}
