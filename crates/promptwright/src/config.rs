//! Configuration file support for promptwright.
//!
//! Loads `promptwright.toml` from the working directory and the global
//! `config.toml` from the user's config directory, then merges them with
//! command-line flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use promptwright_core::CategoryId;
use promptwright_logging::LogFormat;

/// Project-level configuration loaded from `promptwright.toml`.
///
/// The global config uses the same keys under a `[defaults]` table.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Category to start with instead of showing the menu
    pub category: Option<String>,
    /// File the compiled prompt is written to
    pub output: Option<PathBuf>,
    /// Console log format: pretty, json or compact
    pub log_format: Option<String>,
    /// Tracing filter, e.g. "warn" or "promptwright_core=debug"
    pub log_level: Option<String>,
    /// Directory for the tracing log and the JSONL event log
    pub log_dir: Option<PathBuf>,
    /// Open $EDITOR for multi-line answers
    pub use_editor: Option<bool>,
}

/// The config file name
pub const CONFIG_FILE_NAME: &str = "promptwright.toml";

/// Directory under the user config dir holding the global config
pub const GLOBAL_CONFIG_DIR: &str = "promptwright";

/// Global config file name
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

impl ProjectConfig {
    /// Load configuration from the working directory.
    ///
    /// Returns:
    /// - `Ok(Some(config))` if file exists and parses successfully
    /// - `Ok(None)` if file does not exist
    /// - `Err(...)` if file exists but fails to parse (hard error)
    pub fn load(working_dir: &Path) -> Result<Option<Self>> {
        let config_path = working_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: ProjectConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(Some(config))
    }
}

/// User-level configuration in `<config dir>/promptwright/config.toml`
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    #[serde(default)]
    pub defaults: ProjectConfig,
}

impl GlobalConfig {
    /// Location of the global config file, if the platform has a config dir
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILE))
    }

    pub fn exists() -> bool {
        Self::path().is_some_and(|p| p.exists())
    }

    /// Load the global config; `Ok(None)` when there is none
    pub fn load() -> Result<Option<Self>> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: GlobalConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(Some(config))
    }
}

/// Values given on the command line; `None` means "not given"
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub category: Option<CategoryId>,
    pub output: Option<PathBuf>,
    pub log_format: Option<LogFormat>,
    pub log_level: Option<String>,
    pub use_editor: Option<bool>,
}

/// Effective settings after merging every source
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub category: Option<CategoryId>,
    pub output: Option<PathBuf>,
    pub log_format: LogFormat,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
    pub use_editor: bool,
}

const DEFAULT_LOG_LEVEL: &str = "warn";

impl Settings {
    /// Merge the sources.
    /// Priority: CLI flags > project config > global config > default
    pub fn resolve(
        cli: Overrides,
        project: Option<&ProjectConfig>,
        global: Option<&GlobalConfig>,
        working_dir: &Path,
    ) -> Result<Self> {
        let layers: Vec<&ProjectConfig> = project
            .into_iter()
            .chain(global.map(|g| &g.defaults))
            .collect();

        fn first<'a, T: 'a>(
            layers: &[&'a ProjectConfig],
            pick: impl Fn(&'a ProjectConfig) -> Option<T>,
        ) -> Option<T> {
            layers.iter().find_map(|c| pick(*c))
        }

        let category = match cli.category {
            Some(c) => Some(c),
            None => first(&layers, |c| c.category.as_deref())
                .map(|s| {
                    s.parse::<CategoryId>()
                        .with_context(|| format!("Invalid category in configuration: {}", s))
                })
                .transpose()?,
        };

        let log_format = match cli.log_format {
            Some(f) => f,
            None => first(&layers, |c| c.log_format.as_deref())
                .map(|s| s.parse::<LogFormat>().map_err(anyhow::Error::msg))
                .transpose()?
                .unwrap_or_default(),
        };

        let log_level = cli
            .log_level
            .or_else(|| first(&layers, |c| c.log_level.clone()))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let output = cli
            .output
            .or_else(|| first(&layers, |c| c.output.clone()))
            .map(|p| absolutize(working_dir, p));

        let log_dir = first(&layers, |c| c.log_dir.clone()).map(|p| absolutize(working_dir, p));

        let use_editor = cli
            .use_editor
            .or_else(|| first(&layers, |c| c.use_editor))
            .unwrap_or(false);

        Ok(Self {
            category,
            output,
            log_format,
            log_level,
            log_dir,
            use_editor,
        })
    }
}

/// Resolve a relative path against the working directory
pub fn absolutize(working_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        working_dir.join(path)
    }
}
