//! Landing document for the content root.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::EmitError;

/// Filename of the generated landing document.
pub const LANDING_FILENAME: &str = "index.mdx";

/// One partition's landing-redirect target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingTarget {
    /// Language the target serves, when the site is partitioned.
    pub language: Option<String>,
    /// Absolute site path of the partition's first page, slash-wrapped.
    pub target: String,
}

/// Writes the root `index.mdx` linking to each partition's first page.
///
/// A single-partition site gets one link; a partitioned site gets one link
/// per language, labeled with its code.
pub fn write_landing(out_dir: &Path, targets: &[LandingTarget]) -> Result<(), EmitError> {
    let mut body = String::from("---\ntitle: \"Documentation\"\n---\n\n");
    match targets {
        [only] => {
            let _ = writeln!(body, "[Go to the documentation]({})", only.target);
        }
        many => {
            for target in many {
                let label = target.language.as_deref().unwrap_or("default");
                let _ = writeln!(body, "- [{label}]({})", target.target);
            }
        }
    }
    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join(LANDING_FILENAME), body)?;
    Ok(())
}
