//! End-to-end site generation for Docpress.
//!
//! Composes the pipeline: load the navigation document, normalize it into
//! the canonical tree, plan artifacts per partition and write everything
//! out. Each stage lives in its own crate; this one only wires them
//! together and reports what happened.
//!
//! The build is a plain synchronous function. Callers that rebuild on file
//! changes must serialize invocations against one output directory.
//!
//! # Example
//! ```no_run
//! # fn main() -> Result<(), docpress::BuildError> {
//! use std::path::Path;
//!
//! let report = docpress::build_site(Path::new("docs"), Path::new("out/content"))?;
//! for warning in &report.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use docpress_emit::{EmitError, LandingTarget, copy_assets, write_landing, write_meta_files, write_pages};
use docpress_nav::normalize_navigation;
use docpress_site::plan_site;

pub use docpress_config::{ConfigError, DocumentCache, NavDocument, find_document, load_from_dir};
pub use docpress_nav::NormalizedNavigation;
pub use docpress_site::{BuildArtifacts, Partition, SitePlan};

/// Errors aborting a site build.
///
/// Missing source pages are not among them; those are warnings in the
/// returned [`BuildReport`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Emit(#[from] EmitError),
}

/// What one build wrote for one partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionReport {
    pub language: Option<String>,
    pub pages_written: usize,
    pub meta_files_written: usize,
    /// Site path the partition's landing redirect points at.
    pub landing_target: String,
}

/// Summary of one completed build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub partitions: Vec<PartitionReport>,
    pub assets_copied: usize,
    /// Non-fatal problems, one message each; currently only missing
    /// source pages.
    pub warnings: Vec<String>,
}

/// Builds the whole site: reads the navigation document and page sources
/// under `source_dir` and writes the generated project into `out_dir`.
pub fn build_site(source_dir: &Path, out_dir: &Path) -> Result<BuildReport, BuildError> {
    let document = load_from_dir(source_dir)?;
    let normalized = normalize_navigation(&document.navigation);
    let plan = plan_site(&normalized, &document.languages);

    let mut report = BuildReport::default();
    for partition in &plan.partitions {
        let meta_files_written = write_meta_files(out_dir, &partition.artifacts.meta_files)?;
        let pages = write_pages(
            source_dir,
            out_dir,
            &partition.artifacts.page_map,
            partition.language.as_deref(),
        )?;
        report.warnings.extend(pages.warnings);
        report.partitions.push(PartitionReport {
            language: partition.language.clone(),
            pages_written: pages.written,
            meta_files_written,
            landing_target: partition.landing_target(),
        });
    }
    if let Some(root_meta) = &plan.root_meta {
        write_meta_files(out_dir, std::slice::from_ref(root_meta))?;
    }

    let targets: Vec<LandingTarget> = plan
        .partitions
        .iter()
        .map(|partition| LandingTarget {
            language: partition.language.clone(),
            target: partition.landing_target(),
        })
        .collect();
    write_landing(out_dir, &targets)?;
    report.assets_copied = copy_assets(source_dir, out_dir)?;

    tracing::info!(
        partitions = report.partitions.len(),
        pages = report.partitions.iter().map(|p| p.pages_written).sum::<usize>(),
        warnings = report.warnings.len(),
        "site build complete"
    );
    Ok(report)
}
