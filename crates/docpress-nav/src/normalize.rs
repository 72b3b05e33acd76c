//! Reduction of raw navigation into the canonical tree.
//!
//! Documents describe the same site in many shapes: tabs, dropdowns,
//! anchors, products, versions, menus, bare page lists. Normalization
//! folds all of them into one shape, a flat list of [`Tab`]s holding
//! [`Group`]s and ordered entries.
//!
//! # Architecture
//!
//! Top-level collections are walked in a fixed order and each contributes
//! tabs. Every labeled container below the top level folds into a group,
//! so downstream code only ever handles one container shape. Slugs are
//! allocated during the walk through [`SlugScope`], which keeps uniqueness
//! scoped to the siblings a node ends up next to, not to the collection it
//! came from.

use docpress_config::{Container, ContainerContent, LinkNode, NavNode, Navigation};

use crate::slug::{SlugScope, slugify};
use crate::tree::{AxisEntry, Entry, Group, LanguageTabs, Link, NormalizedNavigation, Tab};

/// Label of the tab synthesized when a document has top-level content but
/// no tab-producing collection.
pub const FALLBACK_TAB_LABEL: &str = "Documentation";

/// Normalizes a document's navigation, including its per-language
/// subtrees and the product/version pass-through lists.
#[must_use]
pub fn normalize_navigation(nav: &Navigation) -> NormalizedNavigation {
    NormalizedNavigation {
        tabs: normalize_tabs(nav),
        languages: nav
            .languages
            .iter()
            .map(|lang| LanguageTabs {
                language: lang.language.clone(),
                tabs: normalize_tabs(&lang.nav),
            })
            .collect(),
        products: axis_entries(&nav.products),
        versions: axis_entries(&nav.versions),
    }
}

/// Normalizes one navigation subtree into its tab list.
///
/// Collections contribute in a fixed order: tabs, dropdowns, products,
/// versions, anchors. When none of them yields a tab but loose content
/// exists, a single fallback tab wraps that content, so every valid
/// document produces at least one navigable tab.
#[must_use]
pub fn normalize_tabs(nav: &Navigation) -> Vec<Tab> {
    let mut tabs = Vec::new();
    let mut scope = SlugScope::new();
    for raw in &nav.content.tabs {
        push_tab(&mut tabs, &mut scope, raw, None);
    }
    for raw in &nav.content.dropdowns {
        push_tab(&mut tabs, &mut scope, raw, None);
    }
    for raw in &nav.products {
        push_axis_tabs(&mut tabs, &mut scope, raw);
    }
    for raw in &nav.versions {
        push_axis_tabs(&mut tabs, &mut scope, raw);
    }
    for raw in &nav.content.anchors {
        push_anchor_tabs(&mut tabs, &mut scope, raw);
    }
    if tabs.is_empty() && has_loose_content(&nav.content) {
        tabs.push(fallback_tab(&nav.content, &mut scope));
    }
    tabs
}

fn has_loose_content(content: &ContainerContent) -> bool {
    !content.groups.is_empty() || !content.pages.is_empty() || !content.menu.is_empty()
}

fn fallback_tab(content: &ContainerContent, scope: &mut SlugScope) -> Tab {
    // Anchors already had their chance to contribute tabs; the fallback
    // wraps only the loose collections. Dropdowns and tabs are empty here,
    // or the fallback would not have triggered.
    let loose = ContainerContent {
        menu: content.menu.clone(),
        groups: content.groups.clone(),
        pages: content.pages.clone(),
        ..ContainerContent::default()
    };
    let (groups, pages) = split_entries(collect_entries(&loose));
    Tab {
        label: FALLBACK_TAB_LABEL.to_owned(),
        slug: scope.claim(&slugify(FALLBACK_TAB_LABEL, "documentation")),
        icon: None,
        href: None,
        groups,
        pages,
    }
}

/// Appends one tab normalized from `raw`, optionally namespaced under a
/// slug prefix.
fn push_tab(tabs: &mut Vec<Tab>, scope: &mut SlugScope, raw: &Container, prefix: Option<&str>) {
    let own = raw
        .slug
        .clone()
        .unwrap_or_else(|| slugify(&raw.label, raw.kind.slug_fallback()));
    let base = match prefix {
        Some(prefix) => format!("{prefix}/{own}"),
        None => own,
    };
    // An href with no nested content makes this a terminal link tab; an
    // href next to real content is dropped.
    let href = if raw.content.is_empty() {
        raw.href.clone()
    } else {
        None
    };
    let (groups, pages) = split_entries(collect_entries(&raw.content));
    tabs.push(Tab {
        label: raw.label.clone(),
        slug: scope.claim(&base),
        icon: raw.icon.clone(),
        href,
        groups,
        pages,
    });
}

/// Appends the tabs contributed by one product or version.
///
/// Nested tabs and dropdowns are namespaced under the slugified axis
/// label; an axis with loose content gets a single tab of its own; one
/// carrying nothing but an href becomes a link tab.
fn push_axis_tabs(tabs: &mut Vec<Tab>, scope: &mut SlugScope, raw: &Container) {
    let prefix = raw
        .slug
        .clone()
        .unwrap_or_else(|| slugify(&raw.label, raw.kind.slug_fallback()));
    if !raw.content.tabs.is_empty() || !raw.content.dropdowns.is_empty() {
        for nested in &raw.content.tabs {
            push_tab(tabs, scope, nested, Some(&prefix));
        }
        for nested in &raw.content.dropdowns {
            push_tab(tabs, scope, nested, Some(&prefix));
        }
    } else if !raw.content.is_empty() {
        push_synthesized_tab(tabs, scope, raw, &prefix);
    } else if raw.href.is_some() {
        push_tab(tabs, scope, raw, None);
    }
}

/// Appends the tabs contributed by one top-level anchor.
///
/// Only nested tabs are namespaced; an anchor with loose content gets a
/// single tab of its own. An anchor carrying nothing but an href
/// contributes no tab at all.
fn push_anchor_tabs(tabs: &mut Vec<Tab>, scope: &mut SlugScope, raw: &Container) {
    let prefix = raw
        .slug
        .clone()
        .unwrap_or_else(|| slugify(&raw.label, raw.kind.slug_fallback()));
    if !raw.content.tabs.is_empty() {
        for nested in &raw.content.tabs {
            push_tab(tabs, scope, nested, Some(&prefix));
        }
    } else if !raw.content.is_empty() {
        push_synthesized_tab(tabs, scope, raw, &prefix);
    } else {
        tracing::debug!(anchor = %raw.label, "anchor without nested content contributes no tab");
    }
}

/// Appends a single tab wrapping the whole body of `raw`.
fn push_synthesized_tab(tabs: &mut Vec<Tab>, scope: &mut SlugScope, raw: &Container, base: &str) {
    let (groups, pages) = split_entries(collect_entries(&raw.content));
    tabs.push(Tab {
        label: raw.label.clone(),
        slug: scope.claim(base),
        icon: raw.icon.clone(),
        href: None,
        groups,
        pages,
    });
}

/// Collects a container body into one ordered entry list: menu, then
/// groups, then pages, then anchors, then dropdowns, then nested tabs.
/// Group slugs are allocated here, scoped to this body.
fn collect_entries(content: &ContainerContent) -> Vec<Entry> {
    let mut scope = SlugScope::new();
    let mut entries = Vec::new();
    for raw in &content.menu {
        push_container_entry(&mut entries, &mut scope, raw);
    }
    for raw in &content.groups {
        push_container_entry(&mut entries, &mut scope, raw);
    }
    for node in &content.pages {
        match node {
            NavNode::Page(path) => entries.push(Entry::Page(path.clone())),
            NavNode::Separator(label) => entries.push(Entry::Separator {
                separator: label.clone(),
            }),
            NavNode::Link(link) => entries.push(Entry::Link(link_entry(link))),
            NavNode::Container(raw) => push_container_entry(&mut entries, &mut scope, raw),
        }
    }
    for raw in &content.anchors {
        push_container_entry(&mut entries, &mut scope, raw);
    }
    for raw in &content.dropdowns {
        push_container_entry(&mut entries, &mut scope, raw);
    }
    for raw in &content.tabs {
        push_container_entry(&mut entries, &mut scope, raw);
    }
    entries
}

/// Folds one nested container into an entry: a bare link when it carries
/// nothing but an href, a group otherwise.
fn push_container_entry(entries: &mut Vec<Entry>, scope: &mut SlugScope, raw: &Container) {
    if raw.content.is_empty()
        && let Some(href) = &raw.href
    {
        entries.push(Entry::Link(Link {
            label: raw.label.clone(),
            href: href.clone(),
            icon: raw.icon.clone(),
        }));
        return;
    }
    entries.push(Entry::Group(Box::new(normalize_group(raw, scope))));
}

/// Folds any labeled container into a canonical group.
fn normalize_group(raw: &Container, scope: &mut SlugScope) -> Group {
    let base = raw
        .slug
        .clone()
        .unwrap_or_else(|| slugify(&raw.label, raw.kind.slug_fallback()));
    Group {
        label: raw.label.clone(),
        slug: scope.claim(&base),
        icon: raw.icon.clone(),
        tag: raw.tag.clone(),
        description: raw.description.clone(),
        expanded: raw.expanded.unwrap_or(true),
        hidden: raw.hidden.unwrap_or(false),
        pages: collect_entries(&raw.content),
    }
}

/// Splits a tab body into its groups and its direct entries, preserving
/// the relative order within each list.
fn split_entries(entries: Vec<Entry>) -> (Vec<Group>, Vec<Entry>) {
    let mut groups = Vec::new();
    let mut pages = Vec::new();
    for entry in entries {
        match entry {
            Entry::Group(group) => groups.push(*group),
            other => pages.push(other),
        }
    }
    (groups, pages)
}

fn link_entry(link: &LinkNode) -> Link {
    Link {
        label: link.label.clone(),
        href: link.href.clone(),
        icon: link.icon.clone(),
    }
}

fn axis_entries(list: &[Container]) -> Vec<AxisEntry> {
    list.iter()
        .map(|raw| AxisEntry {
            label: raw.label.clone(),
            href: raw.href.clone(),
            icon: raw.icon.clone(),
        })
        .collect()
}
