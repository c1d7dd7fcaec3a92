//! Generation configuration.
//!
//! A [`BatchConfig`] holds one or more named [`Config`] sets. Each set documents
//! the hierarchy below one root class and produces one output artifact. Sets
//! can be read from a JSON batch file or from doclet-style options such as
//! `-rootClassName_view org.acme.View -maxDepth_view 2`.

use crate::error::{BeanDocError, BeanDocResult};
use crate::parser::simple_name_of;
use crate::renderer::TableLayout;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Settings for documenting one hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    pub root_class_name: String,
    /// Deepest tree level (in edges from the root) that is still visited; `None` is unbounded.
    pub max_depth: Option<usize>,
    /// Package substrings a subtree must match to be visited; `None` accepts every package.
    pub included_packages: Option<BTreeSet<String>>,
    pub excluded_subtrees: BTreeSet<String>,
    pub output_dir: PathBuf,
    pub apidoc_url: Option<String>,
    /// Namespace prefix of domain-owned types; `None` treats every described type as domain-owned.
    pub domain_prefix: Option<String>,
    pub table_layout: Option<TableLayout>,
}

impl Config {
    pub fn new(name: impl Into<String>, root_class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root_class_name: root_class_name.into(),
            max_depth: None,
            included_packages: None,
            excluded_subtrees: BTreeSet::new(),
            output_dir: PathBuf::from("."),
            apidoc_url: None,
            domain_prefix: None,
            table_layout: None,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_included_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_packages = Some(packages.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_excluded_subtrees<I, S>(mut self, subtrees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_subtrees = subtrees.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_apidoc_url(mut self, apidoc_url: impl Into<String>) -> Self {
        self.apidoc_url = Some(apidoc_url.into());
        self
    }

    pub fn with_domain_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.domain_prefix = Some(prefix.into());
        self
    }

    pub fn with_table_layout(mut self, layout: TableLayout) -> Self {
        self.table_layout = Some(layout);
        self
    }

    /// Artifact name: the root's simple name plus the format extension.
    pub fn output_file_name(&self, extension: &str) -> String {
        format!("{}{}", simple_name_of(&self.root_class_name), extension)
    }

    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output_dir.join(self.output_file_name(extension))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfigSet {
    root_class_name: Option<String>,
    /// Negative values mean unbounded
    max_depth: Option<i64>,
    included_packages: Option<Vec<String>>,
    #[serde(default)]
    excluded_subtrees: Vec<String>,
    table_layout: Option<TableLayout>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBatch {
    output_dir: Option<PathBuf>,
    apidoc_url: Option<String>,
    domain_prefix: Option<String>,
    #[serde(default)]
    config_sets: BTreeMap<String, RawConfigSet>,
}

/// Named config sets processed together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchConfig {
    sets: BTreeMap<String, Config>,
}

impl BatchConfig {
    pub fn single(config: Config) -> Self {
        let mut batch = Self::default();
        batch.insert(config);
        batch
    }

    pub fn insert(&mut self, config: Config) {
        self.sets.insert(config.name.clone(), config);
    }

    /// Config sets in name order.
    pub fn configs(&self) -> impl Iterator<Item = &Config> {
        self.sets.values()
    }

    pub fn get(&self, name: &str) -> Option<&Config> {
        self.sets.get(name)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn from_json(json: &str) -> BeanDocResult<Self> {
        let raw: RawBatch = serde_json::from_str(json)?;
        let output_dir = raw.output_dir.unwrap_or_else(|| PathBuf::from("."));

        let mut batch = Self::default();
        for (name, set) in raw.config_sets {
            let config = build_config(
                name,
                set,
                &output_dir,
                raw.apidoc_url.as_deref(),
                raw.domain_prefix.as_deref(),
            )?;
            batch.insert(config);
        }
        Ok(batch)
    }

    pub fn from_file(path: &Path) -> BeanDocResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reads doclet-style `-option[_set] value` pairs.
    ///
    /// `-outputDir`, `-apidocUrl` and `-domainPrefix` apply to every set.
    /// `-rootClassName`, `-maxDepth`, `-includedPackages` and
    /// `-excludedSubtrees` need a `_set` suffix; list values are colon separated
    /// and a negative `-maxDepth` means unbounded. The set name ends at the next
    /// `_`, so `-maxDepth_view_old` configures set `view`.
    pub fn from_doclet_options<S: AsRef<str>>(args: &[S]) -> BeanDocResult<Self> {
        let mut output_dir = PathBuf::from(".");
        let mut apidoc_url = None;
        let mut domain_prefix = None;
        let mut sets: BTreeMap<String, RawConfigSet> = BTreeMap::new();

        let mut args = args.iter().map(AsRef::as_ref);
        while let Some(option) = args.next() {
            let value = args
                .next()
                .ok_or_else(|| BeanDocError::invalid_option(option, ""))?;

            let mut parts = option.split('_');
            let option_name = parts.next().unwrap_or(option);
            let set_name = parts.next();

            match (option_name, set_name) {
                ("-outputDir", _) => output_dir = PathBuf::from(value),
                ("-apidocUrl", _) => apidoc_url = Some(value.to_string()),
                ("-domainPrefix", _) => domain_prefix = Some(value.to_string()),
                (_, Some(set_name)) => {
                    let set = sets.entry(set_name.to_string()).or_default();
                    apply_set_option(set, option_name, option, value)?;
                }
                _ => warn!(option, "ignoring unknown option"),
            }
        }

        let mut batch = Self::default();
        for (name, set) in sets {
            let config = build_config(
                name,
                set,
                &output_dir,
                apidoc_url.as_deref(),
                domain_prefix.as_deref(),
            )?;
            batch.insert(config);
        }
        Ok(batch)
    }
}

fn apply_set_option(
    set: &mut RawConfigSet,
    option_name: &str,
    option: &str,
    value: &str,
) -> BeanDocResult<()> {
    match option_name {
        "-rootClassName" => set.root_class_name = Some(value.to_string()),
        "-maxDepth" => {
            let depth: i64 = value
                .parse()
                .map_err(|_| BeanDocError::invalid_option(option, value))?;
            set.max_depth = Some(depth);
        }
        "-includedPackages" => set.included_packages = Some(split_list(value)),
        "-excludedSubtrees" => set.excluded_subtrees = split_list(value),
        "-tableLayout" => set.table_layout = Some(value.parse()?),
        _ => warn!(option, "ignoring unknown option"),
    }
    Ok(())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(':')
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn build_config(
    name: String,
    set: RawConfigSet,
    output_dir: &Path,
    apidoc_url: Option<&str>,
    domain_prefix: Option<&str>,
) -> BeanDocResult<Config> {
    let root_class_name = set.root_class_name.ok_or(BeanDocError::MissingOption {
        set: name.clone(),
        option: "rootClassName",
    })?;

    Ok(Config {
        name,
        root_class_name,
        max_depth: set.max_depth.and_then(|depth| usize::try_from(depth).ok()),
        included_packages: set.included_packages.map(|p| p.into_iter().collect()),
        excluded_subtrees: set.excluded_subtrees.into_iter().collect(),
        output_dir: output_dir.to_path_buf(),
        apidoc_url: apidoc_url.map(str::to_string),
        domain_prefix: domain_prefix.map(str::to_string),
        table_layout: set.table_layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_uses_root_simple_name() {
        let config = Config::new("view", "org.acme.view.ViewDescriptor").with_output_dir("docs");
        assert_eq!(config.output_file_name(".xml"), "ViewDescriptor.xml");
        assert_eq!(config.output_path(".md"), PathBuf::from("docs/ViewDescriptor.md"));
    }

    #[test]
    fn test_batch_from_json() {
        let json = r#"{
            "outputDir": "target/docs",
            "apidocUrl": "https://api.example.org",
            "configSets": {
                "view": {
                    "rootClassName": "org.acme.View",
                    "maxDepth": 2,
                    "includedPackages": ["view"],
                    "excludedSubtrees": ["org.acme.InternalView"],
                    "tableLayout": "three-column"
                },
                "model": { "rootClassName": "org.acme.Model" }
            }
        }"#;

        let batch = BatchConfig::from_json(json).unwrap();
        assert_eq!(batch.len(), 2);
        let names: Vec<_> = batch.configs().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["model", "view"]);

        let view = batch.get("view").unwrap();
        assert_eq!(view.max_depth, Some(2));
        assert_eq!(view.output_dir, PathBuf::from("target/docs"));
        assert_eq!(view.apidoc_url.as_deref(), Some("https://api.example.org"));
        assert!(view.excluded_subtrees.contains("org.acme.InternalView"));
        assert_eq!(view.table_layout, Some(TableLayout::ThreeColumn));

        let model = batch.get("model").unwrap();
        assert_eq!(model.max_depth, None);
        assert_eq!(model.included_packages, None);
        assert!(model.excluded_subtrees.is_empty());
    }

    #[test]
    fn test_batch_from_json_requires_root() {
        let json = r#"{ "configSets": { "broken": { "maxDepth": 1 } } }"#;
        let err = BatchConfig::from_json(json).unwrap_err();
        assert!(matches!(err, BeanDocError::MissingOption { ref set, .. } if set == "broken"));
    }

    #[test]
    fn test_doclet_options() {
        let args = [
            "-outputDir",
            "out",
            "-apidocUrl",
            "http://docs",
            "-rootClassName_view",
            "org.acme.View",
            "-maxDepth_view",
            "3",
            "-includedPackages_view",
            "acme.view:acme.binding",
            "-excludedSubtrees_view",
            "org.acme.A:org.acme.B",
            "-rootClassName_model",
            "org.acme.Model",
            "-maxDepth_model",
            "-1",
        ];

        let batch = BatchConfig::from_doclet_options(&args).unwrap();
        let view = batch.get("view").unwrap();
        assert_eq!(view.root_class_name, "org.acme.View");
        assert_eq!(view.max_depth, Some(3));
        let packages = view.included_packages.as_ref().unwrap();
        assert!(packages.contains("acme.view") && packages.contains("acme.binding"));
        assert_eq!(view.excluded_subtrees.len(), 2);
        assert_eq!(view.output_dir, PathBuf::from("out"));

        let model = batch.get("model").unwrap();
        assert_eq!(model.max_depth, None);
        assert_eq!(model.apidoc_url.as_deref(), Some("http://docs"));
    }

    #[test]
    fn test_negative_json_depth_is_unbounded() {
        let json = r#"{ "configSets": { "all": { "rootClassName": "p.A", "maxDepth": -1 } } }"#;
        let batch = BatchConfig::from_json(json).unwrap();
        assert_eq!(batch.get("all").unwrap().max_depth, None);
    }

    #[test]
    fn test_set_name_ends_at_next_underscore() {
        let args = ["-rootClassName_view_old", "p.A", "-maxDepth_view", "2"];
        let batch = BatchConfig::from_doclet_options(&args).unwrap();
        assert_eq!(batch.len(), 1);
        let view = batch.get("view").unwrap();
        assert_eq!(view.root_class_name, "p.A");
        assert_eq!(view.max_depth, Some(2));
    }

    #[test]
    fn test_doclet_options_reject_bad_depth() {
        let args = ["-rootClassName_a", "x.A", "-maxDepth_a", "deep"];
        let err = BatchConfig::from_doclet_options(&args).unwrap_err();
        assert!(matches!(err, BeanDocError::InvalidOption { ref value, .. } if value == "deep"));
    }

    #[test]
    fn test_doclet_options_reject_dangling_option() {
        let args = ["-rootClassName_a"];
        assert!(BatchConfig::from_doclet_options(&args).is_err());
    }
}
