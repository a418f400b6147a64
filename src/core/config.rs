//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.focusbox/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::grid::{GRID_ITEMS, GridLayout};
use crate::core::store::default_store_path;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FocusboxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub widgets: Vec<WidgetEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub select_key: Option<String>,
    pub store_path: Option<String>,
    pub persist: Option<bool>,
}

/// One widget on screen, left to right in file order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetEntry {
    /// Display-only box showing the stored selection.
    Value { key: Option<String> },
    Grid {
        items: [String; GRID_ITEMS],
        #[serde(default)]
        layout: GridLayout,
        /// Displayed but skipped by focus traversal when false.
        #[serde(default = "default_focusable")]
        focusable: bool,
        key: Option<String>,
    },
}

fn default_focusable() -> bool {
    true
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SELECT_KEY: &str = "selectedValue";

fn grid_entry(items: [&str; GRID_ITEMS], layout: GridLayout, focusable: bool) -> WidgetEntry {
    WidgetEntry::Grid {
        items: items.map(String::from),
        layout,
        focusable,
        key: None,
    }
}

/// The demo screen: a value box, three reachable grids, one unreachable grid.
pub fn default_widgets() -> Vec<WidgetEntry> {
    vec![
        WidgetEntry::Value { key: None },
        grid_entry(["1", "2", "3", "4"], GridLayout::Column, true),
        grid_entry(["A", "B", "C", "D"], GridLayout::TwoByTwo, true),
        grid_entry(["!", "@", "#", "$"], GridLayout::Row, true),
        grid_entry(["H", "J", "K", "L"], GridLayout::TwoByTwo, false),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub select_key: String,
    /// `None` keeps selections in memory only.
    pub store_path: Option<PathBuf>,
    pub widgets: Vec<WidgetEntry>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.focusbox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".focusbox").join("config.toml"))
}

/// Load config from `explicit` or `~/.focusbox/config.toml`.
///
/// A missing default file is generated (commented out) and yields
/// `FocusboxConfig::default()`. A missing explicit file is an I/O error.
pub fn load_config(explicit: Option<&Path>) -> Result<FocusboxConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(FocusboxConfig::default());
            }
        },
    };

    if explicit.is_none() && !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FocusboxConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<FocusboxConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# focusbox configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# select_key = "selectedValue"       # Or set FOCUSBOX_SELECT_KEY
# store_path = "~/.focusbox/store.json"  # Or set FOCUSBOX_STORE_PATH
# persist = true                     # false keeps selections in memory

# Widgets are drawn left to right. Focus visits focusable grids in order.
# Leaving [[widgets]] out entirely gives the built-in demo screen.

# [[widgets]]
# kind = "value"

# [[widgets]]
# kind = "grid"
# items = ["1", "2", "3", "4"]
# layout = "1x4"                     # "1x4", "4x1" or "2x2"

# [[widgets]]
# kind = "grid"
# items = ["H", "J", "K", "L"]
# layout = "2x2"
# focusable = false
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Expand a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match (raw.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `ephemeral` is the `--ephemeral` CLI flag and always wins.
pub fn resolve(config: &FocusboxConfig, ephemeral: bool) -> ResolvedConfig {
    resolve_with_env(config, ephemeral, |name| std::env::var(name).ok())
}

/// `resolve` with an injectable environment, so tests never touch process env.
pub fn resolve_with_env(
    config: &FocusboxConfig,
    ephemeral: bool,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Select key: env → config → default
    let select_key = env("FOCUSBOX_SELECT_KEY")
        .or_else(|| config.general.select_key.clone())
        .unwrap_or_else(|| DEFAULT_SELECT_KEY.to_string());

    // Store path: CLI (ephemeral) → config persist flag → env → config → default
    let persist = !ephemeral && config.general.persist.unwrap_or(true);
    let store_path = if persist {
        env("FOCUSBOX_STORE_PATH")
            .or_else(|| config.general.store_path.clone())
            .map(|raw| expand_home(&raw))
            .or_else(default_store_path)
    } else {
        None
    };

    let widgets = if config.widgets.is_empty() {
        default_widgets()
    } else {
        config.widgets.clone()
    };

    ResolvedConfig {
        select_key,
        store_path,
        widgets,
    }
}
