//! Site planning for Docpress: artifact generation and partitioning.
//!
//! Consumes the canonical tree produced by `docpress-nav` and computes
//! everything the writers need, without touching the filesystem itself:
//!
//! - [`builder`] walks one tab list into page mappings, per-folder meta
//!   records and the first-page redirect target;
//! - [`partition`] runs the builder once per language partition and
//!   re-roots each output under its storage folder.

pub mod builder;
pub mod partition;

pub use builder::{
    BuildArtifacts, FALLBACK_FIRST_PAGE, MetaData, MetaFile, PageMapping, build_artifacts,
};
pub use partition::{Partition, SitePlan, plan_site};
