//! glink configuration loading from `.glinkrc.toml`.
//!
//! Configuration is optional. Without a config file every variant behaves
//! exactly as its built-in profile describes.
//!
//! # Example Configuration
//!
//! ```toml
//! [export]
//! variant = "styled"
//! output = "graph.json"
//! indent = 4
//! print = true
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use serde::Deserialize;
use std::path::Path;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".glinkrc.toml";

/// Root configuration structure loaded from `.glinkrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct GlinkConfig {
    /// Defaults for `glink export`.
    #[serde(default)]
    pub export: ExportSettings,

    /// Report formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Defaults for the export pipeline.
///
/// Each field, when set, overrides the chosen variant's profile. Command-line
/// flags override these in turn.
#[derive(Debug, Deserialize, Default)]
pub struct ExportSettings {
    /// Variant to run when `--variant` is not given.
    ///
    /// Valid values: `plain`, `styled`, `annotated`
    #[serde(default)]
    pub variant: Option<String>,

    /// Output file path. Default: `graph.json`.
    #[serde(default)]
    pub output: Option<String>,

    /// Indentation width; `0` means compact output.
    #[serde(default)]
    pub indent: Option<usize>,

    /// Whether to echo the document to stdout.
    #[serde(default)]
    pub print: Option<bool>,
}

/// Report formatting preferences.
///
/// These never affect the exported document itself.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Valid values: `table`, `json`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    #[serde(default)]
    pub color: Option<bool>,
}

impl GlinkConfig {
    /// Load configuration from `.glinkrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    pub fn default_variant(&self) -> Option<&str> {
        self.export.variant.as_deref()
    }

    pub fn output_path(&self) -> Option<&str> {
        self.export.output.as_deref()
    }

    pub fn indent(&self) -> Option<usize> {
        self.export.indent
    }

    pub fn print(&self) -> Option<bool> {
        self.export.print
    }

    /// Get the default report format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}
