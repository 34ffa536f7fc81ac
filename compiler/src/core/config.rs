use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::cli::CliConfig;
use super::constants::{APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_DUPLICATE_LAST_SELECTED};
use crate::data::filters::{CompileOptions, OrganizerKind};
use crate::utils::file::{expand_path, read_text};
use crate::utils::sql::is_plain_identifier;
use crate::utils::time::DEFAULT_DATE_FORMAT;

/// Get profile config path (~/.filterql/filterql.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}

// ============================================================================
// File config structures (for JSON parsing)
// ============================================================================

#[derive(Debug, Default, Clone, Deserialize)]
pub struct CompilerFileConfig {
    pub mode: Option<OrganizerKind>,
    pub table_alias: Option<String>,
    pub date_format: Option<String>,
    pub duplicate_last_selected: Option<bool>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub compiler: Option<CompilerFileConfig>,
    pub debug: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = read_text(path)?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(compiler) = other.compiler {
            let current = self.compiler.get_or_insert_with(CompilerFileConfig::default);
            if compiler.mode.is_some() {
                tracing::trace!(mode = ?compiler.mode, "Merging compiler.mode");
                current.mode = compiler.mode;
            }
            if compiler.table_alias.is_some() {
                tracing::trace!(alias = ?compiler.table_alias, "Merging compiler.table_alias");
                current.table_alias = compiler.table_alias;
            }
            if compiler.date_format.is_some() {
                tracing::trace!(format = ?compiler.date_format, "Merging compiler.date_format");
                current.date_format = compiler.date_format;
            }
            if compiler.duplicate_last_selected.is_some() {
                current.duplicate_last_selected = compiler.duplicate_last_selected;
            }
        }

        if other.debug.is_some() {
            self.debug = other.debug;
        }
    }
}

// ============================================================================
// Resolved config structures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    pub mode: OrganizerKind,
    pub table_alias: String,
    pub date_format: String,
    pub duplicate_last_selected: bool,
    pub last_selected: Option<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            mode: OrganizerKind::Default,
            table_alias: String::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            duplicate_last_selected: DEFAULT_DUPLICATE_LAST_SELECTED,
            last_selected: None,
        }
    }
}

impl CompilerConfig {
    pub fn to_compile_options(&self) -> CompileOptions {
        CompileOptions {
            mode: self.mode,
            table_alias: self.table_alias.clone(),
            last_selected_field_name: self.last_selected.clone(),
            date_format: self.date_format.clone(),
            duplicate_last_selected: self.duplicate_last_selected,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub compiler: CompilerConfig,
    pub debug: bool,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.filterql/filterql.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        if let Some(profile_path) = get_profile_config_path()
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        let overlay_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        let config = Self::resolve(cli, file_config);
        config.validate()?;

        tracing::debug!(
            mode = %config.compiler.mode,
            alias = %config.compiler.table_alias,
            date_format = %config.compiler.date_format,
            last_selected = ?config.compiler.last_selected,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Layer CLI/env overrides over file values over defaults
    fn resolve(cli: &CliConfig, file_config: FileConfig) -> Self {
        let file_compiler = file_config.compiler.unwrap_or_default();
        let defaults = CompilerConfig::default();

        let compiler = CompilerConfig {
            mode: cli.mode.or(file_compiler.mode).unwrap_or(defaults.mode),
            table_alias: cli
                .alias
                .clone()
                .or(file_compiler.table_alias)
                .unwrap_or(defaults.table_alias),
            date_format: cli
                .date_format
                .clone()
                .or(file_compiler.date_format)
                .unwrap_or(defaults.date_format),
            duplicate_last_selected: cli
                .duplicate_last_selected
                .or(file_compiler.duplicate_last_selected)
                .unwrap_or(defaults.duplicate_last_selected),
            last_selected: cli.last_selected.clone(),
        };

        Self {
            compiler,
            debug: cli.debug || file_config.debug.unwrap_or(false),
        }
    }

    fn validate(&self) -> Result<()> {
        let compiler = &self.compiler;

        if compiler.date_format.trim().is_empty() {
            anyhow::bail!("Configuration error: compiler.date_format must not be empty");
        }
        if StrftimeItems::new(&compiler.date_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!(
                "Configuration error: compiler.date_format '{}' is not a valid chrono format",
                compiler.date_format
            );
        }
        if !compiler.table_alias.is_empty() && !is_plain_identifier(&compiler.table_alias) {
            anyhow::bail!(
                "Configuration error: compiler.table_alias '{}' must be a plain identifier",
                compiler.table_alias
            );
        }
        if compiler.mode == OrganizerKind::Default && compiler.last_selected.is_some() {
            tracing::warn!("Last selected field is ignored outside global mode");
        }
        Ok(())
    }
}
