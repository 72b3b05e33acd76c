//! Canonical navigation tree.
//!
//! The normalizer reduces every raw document shape to this model: a flat
//! list of tabs, each carrying groups and ordered entries. Serialization
//! mirrors the document vocabulary (`tab`, `group`, `separator`) so a
//! normalized tree reads like a strict version of its source.

use docpress_config::Icon;
use serde::Serialize;

/// Top-level navigation tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tab {
    #[serde(rename = "tab")]
    pub label: String,
    /// Unique among sibling tabs. Namespaced tabs carry a `/`.
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Set only on link tabs, which carry no content of their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Entry>,
}

impl Tab {
    /// Returns `true` when this tab is an external link rather than a
    /// content tab.
    #[must_use]
    pub fn is_link(&self) -> bool {
        self.href.is_some()
    }
}

/// Group of entries inside a tab, possibly nested in another group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group {
    #[serde(rename = "group")]
    pub label: String,
    /// Unique among sibling groups under the same parent.
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub expanded: bool,
    pub hidden: bool,
    pub pages: Vec<Entry>,
}

/// One entry in a group body or a tab's direct page list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// Source page path, extension-free, relative to the content root.
    Page(String),
    /// Nested group.
    Group(Box<Group>),
    /// Labeled divider.
    Separator { separator: String },
    /// External link.
    Link(Link),
}

impl Entry {
    /// Returns the nested group, if this entry is one.
    #[must_use]
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }
}

/// External link entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Product or version entry surfaced for switcher UIs. Content nested
/// under these axes is folded into namespaced tabs; the entries themselves
/// are passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AxisEntry {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

/// Tab list of one language subtree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LanguageTabs {
    pub language: String,
    pub tabs: Vec<Tab>,
}

/// Canonical result of normalizing a navigation document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedNavigation {
    pub tabs: Vec<Tab>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageTabs>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<AxisEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<AxisEntry>,
}
