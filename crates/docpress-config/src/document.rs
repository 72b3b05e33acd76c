//! Typed model of a navigation document.
//!
//! A document is decoded from JSON exactly once, at the crate boundary, into
//! the closed set of shapes below. Downstream crates never see raw
//! `serde_json::Value` navigation nodes; anything that does not fit one of
//! these shapes is dropped during decoding.

use serde::Serialize;
use serde_json::Value;

/// Icon reference attached to a navigation node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub name: String,
    /// Style variant, e.g. `regular` or `solid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Kind of labeled container a raw node declared itself as, derived from
/// the discriminant key that named it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Tab,
    Dropdown,
    Anchor,
    Group,
    MenuItem,
    Product,
    Version,
}

impl ContainerKind {
    /// Slug used when slugifying the label yields an empty string.
    #[must_use]
    pub fn slug_fallback(self) -> &'static str {
        match self {
            Self::Tab => "tab",
            Self::Dropdown => "dropdown",
            Self::Anchor => "anchor",
            Self::Group => "group",
            Self::MenuItem => "menu",
            Self::Product => "product",
            Self::Version => "version",
        }
    }
}

/// Labeled container node: a tab, dropdown, anchor, group, menu item,
/// product or version.
///
/// All kinds share one shape. What distinguishes them is which collection
/// they were found in and which discriminant key labeled them; the
/// normalizer decides what each one becomes.
#[derive(Clone, Debug)]
pub struct Container {
    pub kind: ContainerKind,
    pub label: String,
    /// Slug override. When absent the label is slugified.
    pub slug: Option<String>,
    pub href: Option<String>,
    pub icon: Option<Icon>,
    pub tag: Option<String>,
    pub description: Option<String>,
    pub expanded: Option<bool>,
    pub hidden: Option<bool>,
    pub content: ContainerContent,
}

impl Container {
    /// Creates a container carrying nothing but a kind and a label.
    #[must_use]
    pub fn labeled(kind: ContainerKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            slug: None,
            href: None,
            icon: None,
            tag: None,
            description: None,
            expanded: None,
            hidden: None,
            content: ContainerContent::default(),
        }
    }
}

/// Nested collections a container (or the navigation root) may carry.
#[derive(Clone, Debug, Default)]
pub struct ContainerContent {
    pub menu: Vec<Container>,
    pub groups: Vec<Container>,
    pub pages: Vec<NavNode>,
    pub anchors: Vec<Container>,
    pub dropdowns: Vec<Container>,
    pub tabs: Vec<Container>,
}

impl ContainerContent {
    /// Returns `true` when no nested collection holds any node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menu.is_empty()
            && self.groups.is_empty()
            && self.pages.is_empty()
            && self.anchors.is_empty()
            && self.dropdowns.is_empty()
            && self.tabs.is_empty()
    }
}

/// One node inside a `pages` collection.
#[derive(Clone, Debug)]
pub enum NavNode {
    /// Path of a source page, relative to the content root, without its
    /// file extension.
    Page(String),
    /// Visual divider labeled with the given text.
    Separator(String),
    /// External link.
    Link(LinkNode),
    /// Nested labeled container.
    Container(Box<Container>),
}

/// External link node.
#[derive(Clone, Debug)]
pub struct LinkNode {
    pub label: String,
    pub href: String,
    pub icon: Option<Icon>,
}

/// Navigation collections of a document, or of one language entry.
#[derive(Clone, Debug, Default)]
pub struct Navigation {
    pub content: ContainerContent,
    pub products: Vec<Container>,
    pub versions: Vec<Container>,
    /// Per-language navigation subtrees. Only populated at the top level.
    pub languages: Vec<LanguageNav>,
    pub global: Option<GlobalNav>,
}

/// Navigation subtree dedicated to one language.
#[derive(Clone, Debug)]
pub struct LanguageNav {
    pub language: String,
    pub nav: Navigation,
}

/// Site-wide links rendered outside the page tree. Passed through without
/// normalization.
#[derive(Clone, Debug, Default)]
pub struct GlobalNav {
    pub anchors: Vec<Container>,
    pub tabs: Vec<Container>,
}

/// Fully decoded navigation document.
#[derive(Clone, Debug, Default)]
pub struct NavDocument {
    pub name: Option<String>,
    pub theme: Option<String>,
    /// Languages configured as a flat list, without per-language
    /// navigation subtrees.
    pub languages: Vec<String>,
    pub navigation: Navigation,
    /// Cosmetic settings passed through untouched.
    pub colors: Option<Value>,
    pub appearance: Option<Value>,
    pub styling: Option<Value>,
}

impl NavDocument {
    /// Decodes a document from its raw JSON value.
    ///
    /// Unknown keys are ignored and malformed navigation nodes are dropped;
    /// decoding itself never fails.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        crate::decode::decode_document(value)
    }
}
