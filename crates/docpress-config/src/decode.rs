//! One-pass decode of raw JSON into the typed document model.
//!
//! Shape discrimination happens here and nowhere else. A node that matches
//! none of the known shapes is dropped with a debug log; decoding never
//! aborts the build over a single broken entry.

use serde_json::{Map, Value};

use crate::document::{
    Container, ContainerContent, ContainerKind, GlobalNav, Icon, LanguageNav, LinkNode,
    NavDocument, NavNode, Navigation,
};

/// Discriminant keys naming a container, in resolution priority order.
const DISCRIMINANTS: [(&str, ContainerKind); 7] = [
    ("tab", ContainerKind::Tab),
    ("dropdown", ContainerKind::Dropdown),
    ("anchor", ContainerKind::Anchor),
    ("group", ContainerKind::Group),
    ("item", ContainerKind::MenuItem),
    ("product", ContainerKind::Product),
    ("version", ContainerKind::Version),
];

pub(crate) fn decode_document(value: &Value) -> NavDocument {
    let Some(obj) = value.as_object() else {
        tracing::debug!("navigation document root is not an object");
        return NavDocument::default();
    };
    NavDocument {
        name: string_field(obj, "name"),
        theme: string_field(obj, "theme"),
        languages: language_codes(obj.get("languages")),
        navigation: obj
            .get("navigation")
            .map_or_else(Navigation::default, |nav| decode_navigation(nav, true)),
        colors: obj.get("colors").cloned(),
        appearance: obj.get("appearance").cloned(),
        styling: obj.get("styling").cloned(),
    }
}

fn decode_navigation(value: &Value, top_level: bool) -> Navigation {
    let Some(obj) = value.as_object() else {
        return Navigation::default();
    };
    Navigation {
        content: decode_content(obj),
        products: axis_list(obj.get("products"), ContainerKind::Product),
        versions: axis_list(obj.get("versions"), ContainerKind::Version),
        languages: if top_level {
            language_navs(obj.get("languages"))
        } else {
            Vec::new()
        },
        global: obj.get("global").and_then(Value::as_object).map(|g| GlobalNav {
            anchors: container_list(g.get("anchors")),
            tabs: container_list(g.get("tabs")),
        }),
    }
}

fn decode_content(obj: &Map<String, Value>) -> ContainerContent {
    ContainerContent {
        menu: container_list(obj.get("menu")),
        groups: container_list(obj.get("groups")),
        pages: entry_list(obj.get("pages")),
        anchors: container_list(obj.get("anchors")),
        dropdowns: container_list(obj.get("dropdowns")),
        tabs: container_list(obj.get("tabs")),
    }
}

fn container_list(value: Option<&Value>) -> Vec<Container> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items.iter().filter_map(decode_container).collect()
}

/// Decodes a `products` or `versions` collection. Besides full container
/// objects these accept bare strings, a shorthand older documents use for
/// version lists.
fn axis_list(value: Option<&Value>, kind: ContainerKind) -> Vec<Container> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(label) => Some(Container::labeled(kind, label.clone())),
            other => decode_container(other),
        })
        .collect()
}

/// Decodes the flat top-level `languages` list. Non-string entries are
/// dropped.
fn language_codes(value: Option<&Value>) -> Vec<String> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .map(ToOwned::to_owned)
        .collect()
}

fn language_navs(value: Option<&Value>) -> Vec<LanguageNav> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut navs = Vec::with_capacity(items.len());
    for item in items {
        let language = item.get("language").and_then(Value::as_str);
        if let Some(language) = language {
            navs.push(LanguageNav {
                language: language.to_owned(),
                // A language entry carries its navigation collections on
                // the entry object itself.
                nav: decode_navigation(item, false),
            });
        } else {
            tracing::debug!("skipping language entry without a language code");
        }
    }
    navs
}

fn decode_container(value: &Value) -> Option<Container> {
    let obj = value.as_object()?;
    let Some((kind, label)) = resolve_label(obj) else {
        tracing::debug!("skipping navigation node without a recognized label key");
        return None;
    };
    Some(Container {
        kind,
        label,
        slug: string_field(obj, "slug"),
        href: string_field(obj, "href"),
        icon: decode_icon(obj),
        tag: string_field(obj, "tag"),
        description: string_field(obj, "description"),
        expanded: obj.get("expanded").and_then(Value::as_bool),
        hidden: obj.get("hidden").and_then(Value::as_bool),
        content: decode_content(obj),
    })
}

/// Resolves the discriminant key naming a container. Keys are tried in
/// fixed priority order and the first one holding a string wins, so a node
/// claiming several kinds at once still decodes deterministically.
fn resolve_label(obj: &Map<String, Value>) -> Option<(ContainerKind, String)> {
    DISCRIMINANTS.iter().find_map(|(key, kind)| {
        obj.get(*key)
            .and_then(Value::as_str)
            .map(|label| (*kind, label.to_owned()))
    })
}

fn entry_list(value: Option<&Value>) -> Vec<NavNode> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items.iter().filter_map(decode_entry).collect()
}

fn decode_entry(value: &Value) -> Option<NavNode> {
    match value {
        Value::String(path) => Some(NavNode::Page(path.clone())),
        Value::Object(obj) => {
            if let Some(raw) = obj.get("separator") {
                return raw.as_str().map(|label| NavNode::Separator(label.to_owned()));
            }
            if let Some(container) = decode_container(value) {
                return Some(NavNode::Container(Box::new(container)));
            }
            if let Some(href) = string_field(obj, "href")
                && let Some(label) = string_field(obj, "label")
            {
                return Some(NavNode::Link(LinkNode {
                    label,
                    href,
                    icon: decode_icon(obj),
                }));
            }
            tracing::debug!("skipping page entry with unrecognized shape");
            None
        }
        _ => {
            tracing::debug!("skipping page entry that is neither string nor object");
            None
        }
    }
}

/// Decodes the `icon` field, accepting both the string shorthand (with an
/// optional sibling `iconType`) and the object form.
fn decode_icon(obj: &Map<String, Value>) -> Option<Icon> {
    match obj.get("icon")? {
        Value::String(name) => Some(Icon {
            name: name.clone(),
            style: string_field(obj, "iconType"),
        }),
        Value::Object(props) => {
            let name = props.get("name").and_then(Value::as_str)?;
            Some(Icon {
                name: name.to_owned(),
                style: props
                    .get("style")
                    .and_then(Value::as_str)
                    .map(ToOwned::to_owned),
            })
        }
        _ => None,
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(ToOwned::to_owned)
}
