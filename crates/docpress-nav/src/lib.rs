//! Navigation normalization for Docpress.
//!
//! Raw navigation documents are permissive: the same site can be described
//! with tabs, dropdowns, anchors, products, versions, menus or bare page
//! lists, nested freely. This crate reduces all of that to one canonical
//! shape — a flat list of tabs holding groups and ordered entries — and
//! owns the slug rules that make the reduction deterministic.
//!
//! # Example
//! ```
//! use docpress_config::NavDocument;
//! use docpress_nav::normalize_navigation;
//!
//! let document = NavDocument::from_value(&serde_json::json!({
//!     "navigation": { "pages": ["index", "quickstart"] }
//! }));
//! let normalized = normalize_navigation(&document.navigation);
//! assert_eq!(normalized.tabs[0].slug, "documentation");
//! ```

pub mod normalize;
pub mod slug;
pub mod tree;

pub use normalize::{FALLBACK_TAB_LABEL, normalize_navigation, normalize_tabs};
pub use slug::{SlugScope, slugify};
pub use tree::{AxisEntry, Entry, Group, LanguageTabs, Link, NormalizedNavigation, Tab};
