//! Writers for Docpress build output.
//!
//! The planning crates compute what to write; this crate does the writing:
//! per-folder `meta.json` files, copied pages with title front matter,
//! partition landing documents and static assets. Missing source pages are
//! warnings carried in the returned reports, never errors — the page map
//! stays consistent so navigation survives a page that appears later.

mod assets;
mod frontmatter;
mod landing;
mod meta;
mod pages;

pub use assets::copy_assets;
pub use landing::{LANDING_FILENAME, LandingTarget, write_landing};
pub use meta::{META_FILENAME, write_meta_files};
pub use pages::{PageReport, write_pages};

/// Errors produced while writing build output.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize meta file: {0}")]
    Json(#[from] serde_json::Error),
}
