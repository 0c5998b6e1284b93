//! Resolution order for the configuration:
//!
//! 1. an explicit path (the CLI's `--config`);
//! 2. `$LEXICON_CONFIG_PATH` (TOML or JSON file);
//! 3. `$LEXICON_CONFIG_JSON` (inline JSON);
//! 4. the first existing default file: `lexicon.toml`, `lexicon.json`,
//!    `config/lexicon.toml`, `config/lexicon.json`;
//! 5. built-in defaults.
//!
//! A `.env` file is read first so it can supply the variables above.

pub mod error;

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::LexiconConfig;
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

pub const CONFIG_PATH_VAR: &str = "LEXICON_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "LEXICON_CONFIG_JSON";

const DEFAULT_CONFIG_LOCATIONS: &[&str] = &[
    "lexicon.toml",
    "lexicon.json",
    "config/lexicon.toml",
    "config/lexicon.json",
];

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "built-in defaults"),
            ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::EnvPath(path) => {
                write!(f, "{} (${CONFIG_PATH_VAR})", path.display())
            }
            ConfigSource::EnvInline => write!(f, "${CONFIG_JSON_VAR}"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuration-related environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: env::var(CONFIG_PATH_VAR)
                .ok()
                .filter(|raw| !raw.trim().is_empty())
                .map(PathBuf::from),
            config_json: env::var(CONFIG_JSON_VAR)
                .ok()
                .filter(|raw| !raw.trim().is_empty()),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Directory the default file locations are relative to; the working
    /// directory when unset.
    pub search_root: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: LexiconConfig,
    pub source: ConfigSource,
    pub warnings: ConfigWarnings,
    pub env_file_loaded: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.search_root = Some(path.into());
        self
    }

    /// Read `.env`, then resolve the configuration from the process
    /// environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let mut load = self.load_with_env(&EnvConfig::gather())?;
        load.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve the configuration against `env` without touching the process
    /// environment.
    pub fn load_with_env(
        &self,
        env: &EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (config, source) = self.resolve(env)?;
        let mut warnings = apply_guard_rails(&config)?;

        if source == ConfigSource::Default {
            warnings.push_with_hint(
                "No lexicon.toml detected; using built-in defaults",
                "Run `lexiconctl config init` to write one",
            );
        }
        info!(source = %source, "configuration loaded");

        Ok(ConfigLoad {
            config,
            source,
            warnings,
            env_file_loaded: false,
        })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        match loaded {
            Ok(found) => Ok(found),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn resolve(
        &self,
        env: &EnvConfig,
    ) -> Result<(LexiconConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let config = read_required(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            let config = read_required(path)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let config = LexiconConfig::parse_json(raw)
                .map_err(|err| {
                    err.context(format!("failed to parse {CONFIG_JSON_VAR}"))
                })
                .map_err(ConfigLoadError::Parse)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            debug!(path = %path.display(), "using default config location");
            let config = LexiconConfig::load_from_file(&path)
                .map_err(ConfigLoadError::Parse)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((LexiconConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self
            .options
            .search_root
            .as_deref()
            .unwrap_or_else(|| Path::new(""));
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

fn read_required(path: &Path) -> Result<LexiconConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }
    LexiconConfig::load_from_file(path).map_err(ConfigLoadError::Parse)
}
