//! Generator configuration.
//!
//! Loaded from a TOML file (typically `typegen.toml`):
//!
//! ```toml
//! output = "src/graphql"
//! style = "standalone"
//! exclude-fields = ["password"]
//! models = ["User", "Post"]
//!
//! [exclude-fields-by-model]
//! User = ["hash"]
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CodegenError, Result};

/// Which flavour of the schema library the generated files target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputStyle {
    /// `@nexus/schema`: each model is an exported constant, re-exported
    /// through per-model and root `index.ts` files.
    Standalone,
    /// `nexus`: each model registers itself on the shared `schema` builder.
    /// Only `type.ts` files are written.
    #[default]
    SharedBuilder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Directory that receives one sub-directory per model.
    pub output: PathBuf,

    pub exclude_models: BTreeSet<String>,

    /// Fields dropped from every model.
    pub exclude_fields: BTreeSet<String>,

    /// Fields dropped from one model only, keyed by model name.
    pub exclude_fields_by_model: BTreeMap<String, BTreeSet<String>>,

    /// Allow-list of models. `None` means every eligible model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<BTreeSet<String>>,

    pub style: OutputStyle,

    /// Forwarded to the query/mutation generator.
    pub exclude_queries_and_mutations: BTreeSet<String>,

    /// Forwarded to the query/mutation generator.
    pub exclude_queries_and_mutations_by_model: BTreeMap<String, BTreeSet<String>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("src/graphql"),
            exclude_models: BTreeSet::new(),
            exclude_fields: BTreeSet::new(),
            exclude_fields_by_model: BTreeMap::new(),
            models: None,
            style: OutputStyle::default(),
            exclude_queries_and_mutations: BTreeSet::new(),
            exclude_queries_and_mutations_by_model: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CodegenError::io(path, e))?;
        toml::from_str(&content).map_err(|source| CodegenError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Union of the global and the per-model field exclusions.
    pub fn excluded_fields(&self, model: &str) -> BTreeSet<&str> {
        let mut excluded: BTreeSet<&str> =
            self.exclude_fields.iter().map(String::as_str).collect();
        if let Some(per_model) = self.exclude_fields_by_model.get(model) {
            excluded.extend(per_model.iter().map(String::as_str));
        }
        excluded
    }

    /// Path of the root `index.ts`.
    pub fn root_index_path(&self) -> PathBuf {
        self.output.join("index.ts")
    }

    /// Directory holding one model's files.
    pub fn model_dir(&self, model: &str) -> PathBuf {
        self.output.join(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output, PathBuf::from("src/graphql"));
        assert_eq!(config.style, OutputStyle::SharedBuilder);
        assert!(config.models.is_none());
        assert_eq!(config.root_index_path(), PathBuf::from("src/graphql/index.ts"));
    }

    #[test]
    fn parses_kebab_case_toml() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            output = "gen"
            style = "standalone"
            exclude-fields = ["password"]
            models = ["User"]

            [exclude-fields-by-model]
            User = ["hash"]
            "#,
        )
        .unwrap();

        assert_eq!(config.output, PathBuf::from("gen"));
        assert_eq!(config.style, OutputStyle::Standalone);
        assert_eq!(config.models, Some(BTreeSet::from(["User".to_string()])));
        assert!(config.exclude_models.is_empty());
    }

    #[test]
    fn excluded_fields_merges_global_and_per_model() {
        let mut config = GeneratorConfig::default();
        config.exclude_fields.insert("password".into());
        config
            .exclude_fields_by_model
            .insert("User".into(), BTreeSet::from(["hash".to_string()]));

        assert_eq!(
            config.excluded_fields("User"),
            BTreeSet::from(["hash", "password"])
        );
        assert_eq!(config.excluded_fields("Post"), BTreeSet::from(["password"]));
    }

    #[test]
    fn load_reports_path_on_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typegen.toml");
        std::fs::write(&path, "style = 3").unwrap();

        match GeneratorConfig::load(&path) {
            Err(CodegenError::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CodegenError::Io { .. }));
    }
}
