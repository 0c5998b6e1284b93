use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use lexicon_core::{CatalogFormat, EngineSettings};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to assemble a catalog view.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub engine: EngineSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Vocabulary file: a JSON array of entries or tab-separated pairs.
    pub path: PathBuf,
    /// `auto` picks the parser from the file extension.
    pub format: CatalogFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/vocabulary.json"),
            format: CatalogFormat::Auto,
        }
    }
}

/// Local files standing in for browser storage and the remote favorites
/// database.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub preferences_path: PathBuf,
    pub favorites_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_path: PathBuf::from("data/preferences.json"),
            favorites_path: PathBuf::from("data/favorites.json"),
        }
    }
}

impl LexiconConfig {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid config {}", path.display())),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// TOML first, then JSON.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid config json: {err}"))
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to render config as TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = LexiconConfig::parse_from_str(
            "[engine]\nhold_threshold_ms = 500\n",
            "inline",
        )
        .unwrap();
        assert_eq!(config.engine.hold_threshold_ms, 500);
        assert_eq!(config.engine.default_page_size, 12);
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn json_falls_back_after_toml() {
        let config = LexiconConfig::parse_from_str(
            r#"{"catalog": {"path": "words.tsv", "format": "tsv"}}"#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.catalog.path, PathBuf::from("words.tsv"));
        assert_eq!(config.catalog.format, CatalogFormat::Tsv);
    }

    #[test]
    fn garbage_reports_both_parsers() {
        let err = LexiconConfig::parse_from_str("{{nope", "inline").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("toml error"));
        assert!(message.contains("json error"));
    }

    #[test]
    fn defaults_render_as_toml() {
        let rendered = LexiconConfig::default().to_toml_string().unwrap();
        let parsed = LexiconConfig::parse_from_str(&rendered, "rendered").unwrap();
        assert_eq!(parsed, LexiconConfig::default());
    }
}
