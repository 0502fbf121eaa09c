//! Configuration for the skit tool.
//!
//! The tool always starts from `defaults/skit.default.toml`, which is compiled in. A TOML
//! file given with `--config` is layered over it, and `--format` wins over both.

use crate::skit::formats::Format;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/skit.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct SkitConfig {
    pub output: OutputConfig,
}

/// How rendered values are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Format,
    /// Indent JSON output.
    pub pretty: bool,
}

/// Stacks configuration sources; later sources override earlier ones.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn from_defaults() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Adds a user TOML file. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Forces the output format, whatever the files say.
    pub fn with_format(mut self, format: Format) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("output.format", format.name())?;
        Ok(self)
    }

    pub fn build(self) -> Result<SkitConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}
