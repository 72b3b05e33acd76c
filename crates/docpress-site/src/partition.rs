//! Multi-language partitioning of build output.
//!
//! A site either configures per-language navigation subtrees, a flat list
//! of language codes sharing one tree, or no language axis at all. This
//! module picks the mode, runs the artifact builder per partition and
//! re-roots each partition's artifacts under its storage folder.

use docpress_nav::{LanguageTabs, NormalizedNavigation};

use crate::builder::{BuildArtifacts, MetaData, MetaFile, build_artifacts};

/// One language's (or the single default) complete copy of the generated
/// content tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    /// Language this partition serves, when one is configured.
    pub language: Option<String>,
    /// Storage folder under the content output root; empty means content
    /// sits at the root itself.
    pub storage_prefix: String,
    /// URL prefix pages are addressed under; empty for the default
    /// partition. Storage and URL prefixes can differ: the default
    /// language may live in its own folder yet be addressed bare.
    pub url_prefix: String,
    /// Artifacts already re-rooted under `storage_prefix`; `first_page`
    /// stays partition-relative.
    pub artifacts: BuildArtifacts,
}

impl Partition {
    /// Link target of the landing redirect for this partition.
    #[must_use]
    pub fn landing_target(&self) -> String {
        if self.url_prefix.is_empty() {
            format!("/{}/", self.artifacts.first_page)
        } else {
            format!("/{}/{}/", self.url_prefix, self.artifacts.first_page)
        }
    }
}

/// Complete build plan for a site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitePlan {
    pub partitions: Vec<Partition>,
    /// Present only when content is split across language folders; lists
    /// every folder hidden so none renders as a top-level nav item.
    pub root_meta: Option<MetaFile>,
}

/// Plans the whole site: selects the partitioning mode and runs the
/// artifact builder once per partition.
///
/// With per-language navigation every language, including the first, gets
/// its own storage folder. With only a flat language list the single
/// artifact set is replicated per language; a list of one (or none) means
/// no partitioning at all.
#[must_use]
pub fn plan_site(nav: &NormalizedNavigation, flat_languages: &[String]) -> SitePlan {
    if !nav.languages.is_empty() {
        return per_language_plan(&nav.languages);
    }
    let artifacts = build_artifacts(&nav.tabs);
    if flat_languages.len() > 1 {
        return replicated_plan(&artifacts, flat_languages);
    }
    tracing::debug!("planned single-partition site");
    SitePlan {
        partitions: vec![Partition {
            language: flat_languages.first().cloned(),
            storage_prefix: String::new(),
            url_prefix: String::new(),
            artifacts,
        }],
        root_meta: None,
    }
}

fn per_language_plan(languages: &[LanguageTabs]) -> SitePlan {
    let mut partitions = Vec::with_capacity(languages.len());
    for (index, lang) in languages.iter().enumerate() {
        partitions.push(Partition {
            language: Some(lang.language.clone()),
            storage_prefix: lang.language.clone(),
            url_prefix: url_prefix(index, &lang.language),
            artifacts: reroot(build_artifacts(&lang.tabs), &lang.language),
        });
    }
    tracing::debug!(languages = languages.len(), "planned per-language site");
    let root_meta = language_root_meta(&partitions);
    SitePlan {
        partitions,
        root_meta: Some(root_meta),
    }
}

fn replicated_plan(artifacts: &BuildArtifacts, languages: &[String]) -> SitePlan {
    let mut partitions = Vec::with_capacity(languages.len());
    for (index, language) in languages.iter().enumerate() {
        partitions.push(Partition {
            language: Some(language.clone()),
            storage_prefix: language.clone(),
            url_prefix: url_prefix(index, language),
            artifacts: reroot(artifacts.clone(), language),
        });
    }
    tracing::debug!(languages = languages.len(), "planned replicated site");
    let root_meta = language_root_meta(&partitions);
    SitePlan {
        partitions,
        root_meta: Some(root_meta),
    }
}

/// The first language doubles as the default locale and is addressed
/// without a URL prefix, wherever it is stored.
fn url_prefix(index: usize, language: &str) -> String {
    if index == 0 {
        String::new()
    } else {
        language.to_owned()
    }
}

/// Root meta listing each language folder hidden; language switching is
/// an outer-UI concern, not a nav item.
fn language_root_meta(partitions: &[Partition]) -> MetaFile {
    MetaFile {
        dir: String::new(),
        data: MetaData {
            pages: partitions
                .iter()
                .map(|partition| format!("!{}", partition.storage_prefix))
                .collect(),
            ..MetaData::default()
        },
    }
}

/// Re-roots one artifact set under a storage prefix. Meta directories and
/// page destinations move; `first_page` stays partition-relative because
/// it feeds URL computation, not storage.
fn reroot(mut artifacts: BuildArtifacts, prefix: &str) -> BuildArtifacts {
    for meta in &mut artifacts.meta_files {
        meta.dir = if meta.dir.is_empty() {
            prefix.to_owned()
        } else {
            format!("{prefix}/{}", meta.dir)
        };
    }
    for mapping in &mut artifacts.page_map {
        mapping.dest = format!("{prefix}/{}", mapping.dest);
    }
    artifacts
}
