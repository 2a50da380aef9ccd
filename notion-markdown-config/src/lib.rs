//! Shared configuration loader for the notion-markdown toolchain.
//!
//! The defaults live in `defaults/notion-markdown.default.toml` and are
//! compiled in. On top of them [`Loader`] stacks, in call order: a
//! `notion-markdown.toml` from the working directory, an explicit file, and
//! flag overrides.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use notion_markdown::formats::JsonFormat;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/notion-markdown.default.toml");

/// Top-level configuration consumed by notion-markdown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionMarkdownConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Output knobs for converted documents.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Spaces per JSON indent level; `0` is compact.
    pub json_indent: usize,
}

impl From<&OutputConfig> for JsonFormat {
    fn from(config: &OutputConfig) -> Self {
        JsonFormat::with_indent(config.json_indent)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback log filter when the environment sets none.
    pub level: String,
}

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "notion-markdown.toml";

/// Builds a [`NotionMarkdownConfig`] from the embedded defaults plus any
/// number of layers, later layers winning key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only the embedded defaults.
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let layer = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(layer);
        self
    }

    /// Layer a TOML file that must exist; `build` fails otherwise.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file only if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    /// Layer [`LOCAL_CONFIG_FILE`] from `dir`, if there is one.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(LOCAL_CONFIG_FILE);
        self.with_toml(&path, false)
    }

    /// Override the JSON indent width, e.g. from `--indent`.
    pub fn with_json_indent(self, indent: Option<usize>) -> Result<Self, ConfigError> {
        match indent {
            Some(indent) => {
                let indent =
                    i64::try_from(indent).map_err(|e| ConfigError::Message(e.to_string()))?;
                self.set_override("output.json_indent", indent)
            }
            None => Ok(self),
        }
    }

    /// Override any key by its dotted path.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all layers and deserialize them.
    pub fn build(self) -> Result<NotionMarkdownConfig, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Loader::new()
    }
}
