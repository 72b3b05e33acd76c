//! Build-artifact generation from the canonical tree.
//!
//! One pre-order walk of a tab list produces everything the writers need:
//! the page mapping table, one ordering/metadata record per output folder,
//! and the first page for the landing redirect. The walk is pure; for a
//! fixed input it always yields the same artifacts in the same order, so
//! watch-triggered rebuilds never thrash unrelated output files.

use docpress_nav::{Entry, Group, Tab};
use serde::Serialize;

/// Destination used for the landing redirect when a build produced no
/// pages at all.
pub const FALLBACK_FIRST_PAGE: &str = "index";

/// Mapping from one source page reference to its destination path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMapping {
    /// Source page reference, extension-free, relative to the content
    /// source root.
    pub src: String,
    /// Slash-joined destination path under the content output root,
    /// extension-free.
    pub dest: String,
}

/// Ordering and display metadata for one output folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaFile {
    /// Folder path under the content output root; empty string is the
    /// root itself.
    pub dir: String,
    pub data: MetaData,
}

/// Payload of one `meta.json` file.
///
/// `pages` references children by basename or slug; a `!` prefix hides an
/// entry, separators are encoded `---label---` and external links
/// `[icon][label](href)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetaData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "defaultOpen", skip_serializing_if = "Option::is_none")]
    pub default_open: Option<bool>,
    pub pages: Vec<String>,
}

/// Everything one artifact-builder run produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildArtifacts {
    pub page_map: Vec<PageMapping>,
    pub meta_files: Vec<MetaFile>,
    /// Destination of the first page encountered in pre-order, or
    /// [`FALLBACK_FIRST_PAGE`] when the navigation holds none.
    pub first_page: String,
}

/// Walks one canonical tab list and produces its artifacts.
///
/// Link tabs contribute an encoded entry to the root ordering list but no
/// content of their own. The root meta itself is emitted only when at
/// least one content tab exists.
#[must_use]
pub fn build_artifacts(tabs: &[Tab]) -> BuildArtifacts {
    let mut walk = Walk::default();
    let mut root_order = Vec::with_capacity(tabs.len());
    let mut has_content_tab = false;
    for tab in tabs {
        match &tab.href {
            Some(href) => root_order.push(encode_link(
                tab.icon.as_ref().map(|icon| icon.name.as_str()),
                &tab.label,
                href,
            )),
            None => {
                has_content_tab = true;
                root_order.push(tab.slug.clone());
                walk.add_tab(tab);
            }
        }
    }
    if has_content_tab {
        walk.meta_files.push(MetaFile {
            dir: String::new(),
            data: MetaData {
                pages: root_order,
                ..MetaData::default()
            },
        });
    }
    BuildArtifacts {
        page_map: walk.page_map,
        meta_files: walk.meta_files,
        first_page: walk
            .first_page
            .unwrap_or_else(|| FALLBACK_FIRST_PAGE.to_owned()),
    }
}

#[derive(Default)]
struct Walk {
    page_map: Vec<PageMapping>,
    meta_files: Vec<MetaFile>,
    first_page: Option<String>,
}

impl Walk {
    fn add_tab(&mut self, tab: &Tab) {
        let mut order = Vec::new();
        for group in &tab.groups {
            order.push(folder_ref(&group.slug, group.hidden));
            self.add_group(group, &tab.slug);
        }
        self.add_entries(&tab.pages, &tab.slug, &mut order);
        self.meta_files.push(MetaFile {
            dir: tab.slug.clone(),
            data: MetaData {
                title: Some(tab.label.clone()),
                root: Some(true),
                icon: tab.icon.as_ref().map(|icon| icon.name.clone()),
                pages: order,
                ..MetaData::default()
            },
        });
    }

    fn add_group(&mut self, group: &Group, parent_dir: &str) {
        let dir = format!("{parent_dir}/{}", group.slug);
        let mut order = Vec::new();
        self.add_entries(&group.pages, &dir, &mut order);
        self.meta_files.push(MetaFile {
            dir,
            data: MetaData {
                title: Some(group.label.clone()),
                icon: group.icon.as_ref().map(|icon| icon.name.clone()),
                description: group.description.clone(),
                default_open: Some(group.expanded),
                pages: order,
                ..MetaData::default()
            },
        });
    }

    fn add_entries(&mut self, entries: &[Entry], dir: &str, order: &mut Vec<String>) {
        for entry in entries {
            match entry {
                Entry::Page(src) => {
                    let name = basename(src);
                    let dest = format!("{dir}/{name}");
                    if self.first_page.is_none() {
                        self.first_page = Some(dest.clone());
                    }
                    order.push(name.to_owned());
                    self.page_map.push(PageMapping {
                        src: src.clone(),
                        dest,
                    });
                }
                Entry::Group(child) => {
                    order.push(folder_ref(&child.slug, child.hidden));
                    self.add_group(child, dir);
                }
                Entry::Separator { separator } => order.push(encode_separator(separator)),
                Entry::Link(link) => order.push(encode_link(
                    link.icon.as_ref().map(|icon| icon.name.as_str()),
                    &link.label,
                    &link.href,
                )),
            }
        }
    }
}

/// Last path segment of a page reference.
fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn folder_ref(slug: &str, hidden: bool) -> String {
    if hidden {
        format!("!{slug}")
    } else {
        slug.to_owned()
    }
}

fn encode_separator(label: &str) -> String {
    if label.is_empty() {
        "---".to_owned()
    } else {
        format!("---{label}---")
    }
}

fn encode_link(icon: Option<&str>, label: &str, href: &str) -> String {
    match icon {
        Some(icon) => format!("[{icon}][{label}]({href})"),
        None => format!("[{label}]({href})"),
    }
}

#[cfg(test)]
mod tests {
    use docpress_config::NavDocument;
    use docpress_nav::normalize_tabs;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn tabs_from(value: serde_json::Value) -> Vec<Tab> {
        let document = NavDocument::from_value(&json!({ "navigation": value }));
        normalize_tabs(&document.navigation)
    }

    fn meta<'a>(artifacts: &'a BuildArtifacts, dir: &str) -> &'a MetaFile {
        artifacts
            .meta_files
            .iter()
            .find(|meta| meta.dir == dir)
            .unwrap_or_else(|| panic!("no meta file for {dir:?}"))
    }

    /// Checks that every plain reference in every ordering list resolves
    /// to a page destination or a child folder.
    fn assert_no_dangling(artifacts: &BuildArtifacts) {
        for file in &artifacts.meta_files {
            for raw in &file.data.pages {
                if raw.starts_with("---") || raw.starts_with('[') {
                    continue;
                }
                let name = raw.strip_prefix('!').unwrap_or(raw);
                let child = if file.dir.is_empty() {
                    name.to_owned()
                } else {
                    format!("{}/{name}", file.dir)
                };
                let is_page = artifacts.page_map.iter().any(|m| m.dest == child);
                let is_folder = artifacts.meta_files.iter().any(|m| m.dir == child);
                assert!(
                    is_page || is_folder,
                    "dangling reference {raw:?} in meta for {:?}",
                    file.dir
                );
            }
        }
    }

    #[test]
    fn test_duplicate_group_slugs_get_distinct_destinations() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [{
                "tab": "Guides",
                "groups": [
                    {"group": "Guides", "pages": ["intro"]},
                    {"group": "Guides", "pages": ["intro"]}
                ]
            }]
        })));

        let dests: Vec<&str> = artifacts.page_map.iter().map(|m| m.dest.as_str()).collect();
        assert_eq!(dests, ["guides/guides/intro", "guides/guides-2/intro"]);
        assert_eq!(artifacts.page_map[0].src, "intro");
        assert_eq!(artifacts.first_page, "guides/guides/intro");
        assert_no_dangling(&artifacts);
    }

    #[test]
    fn test_destination_uses_source_basename() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [{
                "tab": "API",
                "groups": [{"group": "Auth", "pages": ["reference/auth/tokens"]}]
            }]
        })));

        assert_eq!(artifacts.page_map[0].src, "reference/auth/tokens");
        assert_eq!(artifacts.page_map[0].dest, "api/auth/tokens");
    }

    #[test]
    fn test_tab_meta_lists_groups_then_direct_pages() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [{
                "tab": "Guides",
                "icon": "book",
                "groups": [{"group": "Start", "pages": ["intro"]}],
                "pages": ["changelog"]
            }]
        })));

        let tab_meta = meta(&artifacts, "guides");
        assert_eq!(tab_meta.data.title.as_deref(), Some("Guides"));
        assert_eq!(tab_meta.data.root, Some(true));
        assert_eq!(tab_meta.data.icon.as_deref(), Some("book"));
        assert_eq!(tab_meta.data.pages, ["start", "changelog"]);
        assert_no_dangling(&artifacts);
    }

    #[test]
    fn test_group_meta_carries_display_fields() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [{
                "tab": "Guides",
                "groups": [{
                    "group": "Start Here",
                    "icon": "rocket",
                    "description": "First steps",
                    "expanded": false,
                    "pages": ["intro"]
                }]
            }]
        })));

        let group_meta = meta(&artifacts, "guides/start-here");
        assert_eq!(group_meta.data.title.as_deref(), Some("Start Here"));
        assert_eq!(group_meta.data.icon.as_deref(), Some("rocket"));
        assert_eq!(group_meta.data.description.as_deref(), Some("First steps"));
        assert_eq!(group_meta.data.default_open, Some(false));
        assert_eq!(group_meta.data.root, None);
    }

    #[test]
    fn test_hidden_group_is_bang_prefixed() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [{
                "tab": "Docs",
                "groups": [
                    {"group": "Visible", "pages": ["a"]},
                    {"group": "Internal", "hidden": true, "pages": ["b"]}
                ]
            }]
        })));

        assert_eq!(meta(&artifacts, "docs").data.pages, ["visible", "!internal"]);
        // Hidden groups still generate content.
        assert!(artifacts.page_map.iter().any(|m| m.dest == "docs/internal/b"));
        assert_no_dangling(&artifacts);
    }

    #[test]
    fn test_separator_and_link_encodings() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [{
                "tab": "Docs",
                "pages": [
                    "intro",
                    {"separator": "Resources"},
                    {"label": "Status", "href": "https://status.acme.dev", "icon": "signal"},
                    {"label": "Blog", "href": "https://acme.dev/blog"}
                ]
            }]
        })));

        assert_eq!(
            meta(&artifacts, "docs").data.pages,
            [
                "intro",
                "---Resources---",
                "[signal][Status](https://status.acme.dev)",
                "[Blog](https://acme.dev/blog)"
            ]
        );
        // Encoded entries never become page mappings.
        assert_eq!(artifacts.page_map.len(), 1);
    }

    #[test]
    fn test_link_tab_encoded_in_root_meta_only() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [
                {"tab": "Guides", "pages": ["intro"]},
                {"tab": "Blog", "href": "https://acme.dev/blog"}
            ]
        })));

        let root = meta(&artifacts, "");
        assert_eq!(root.data.pages, ["guides", "[Blog](https://acme.dev/blog)"]);
        // No meta folder and no mappings for the link tab.
        assert_eq!(artifacts.meta_files.len(), 2);
        assert_no_dangling(&artifacts);
    }

    #[test]
    fn test_nested_groups_nest_directories() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [{
                "tab": "Guides",
                "groups": [{
                    "group": "Outer",
                    "pages": [
                        "first",
                        {"group": "Inner", "pages": ["deep"]}
                    ]
                }]
            }]
        })));

        assert_eq!(meta(&artifacts, "guides/outer").data.pages, ["first", "inner"]);
        assert_eq!(meta(&artifacts, "guides/outer/inner").data.pages, ["deep"]);
        assert!(artifacts.page_map.iter().any(|m| m.dest == "guides/outer/inner/deep"));
        assert_no_dangling(&artifacts);
    }

    #[test]
    fn test_first_page_follows_pre_order() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [
                {"tab": "Second", "href": "https://acme.dev"},
                {"tab": "Guides", "groups": [{"group": "Start", "pages": ["from-group"]}],
                 "pages": ["direct"]}
            ]
        })));

        // Groups are walked before the tab's direct pages.
        assert_eq!(artifacts.first_page, "guides/start/from-group");
    }

    #[test]
    fn test_empty_navigation_falls_back() {
        let artifacts = build_artifacts(&[]);

        assert_eq!(artifacts.first_page, FALLBACK_FIRST_PAGE);
        assert!(artifacts.page_map.is_empty());
        assert!(artifacts.meta_files.is_empty());
    }

    #[test]
    fn test_only_link_tabs_emit_no_root_meta() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [{"tab": "Blog", "href": "https://acme.dev/blog"}]
        })));

        assert!(artifacts.meta_files.is_empty());
        assert_eq!(artifacts.first_page, FALLBACK_FIRST_PAGE);
    }

    #[test]
    fn test_namespaced_tab_slugs_flow_into_paths() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "anchors": [{
                "anchor": "Cloud API",
                "tabs": [{"tab": "Reference", "groups": [{"group": "Auth", "pages": ["auth"]}]}]
            }]
        })));

        assert_eq!(artifacts.page_map[0].dest, "cloud-api/reference/auth/auth");
        assert_eq!(meta(&artifacts, "").data.pages, ["cloud-api/reference"]);
        assert_no_dangling(&artifacts);
    }

    #[test]
    fn test_build_is_deterministic() {
        let tabs = tabs_from(json!({
            "tabs": [
                {"tab": "Guides", "groups": [
                    {"group": "Start", "pages": ["intro", {"separator": "More"}, "next"]},
                    {"group": "Start", "hidden": true, "pages": ["again"]}
                ]},
                {"tab": "Blog", "href": "https://acme.dev/blog"}
            ]
        }));

        assert_eq!(build_artifacts(&tabs), build_artifacts(&tabs));
    }

    #[test]
    fn test_meta_serialization_shape() {
        let artifacts = build_artifacts(&tabs_from(json!({
            "tabs": [{"tab": "Guides", "groups": [{"group": "Start", "pages": ["intro"]}]}]
        })));

        let value = serde_json::to_value(&meta(&artifacts, "guides/start").data).unwrap();
        assert_eq!(
            value,
            json!({"title": "Start", "defaultOpen": true, "pages": ["intro"]})
        );

        let root = serde_json::to_value(&meta(&artifacts, "").data).unwrap();
        assert_eq!(root, json!({"pages": ["guides"]}));
    }
}
