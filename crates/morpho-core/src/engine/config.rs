use crate::core::io::format::OutputFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub output_directory: PathBuf,
    pub output_format: OutputFormat,
    /// Create `output_directory` (and its parents) when it does not exist yet.
    pub create_output_directory: bool,
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    output_directory: Option<PathBuf>,
    output_format: Option<OutputFormat>,
    create_output_directory: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_directory(mut self, path: PathBuf) -> Self {
        self.output_directory = Some(path);
        self
    }
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }
    pub fn create_output_directory(mut self, create: bool) -> Self {
        self.create_output_directory = Some(create);
        self
    }

    pub fn build(self) -> Result<ConversionConfig, ConfigError> {
        Ok(ConversionConfig {
            output_directory: self
                .output_directory
                .ok_or(ConfigError::MissingParameter("output_directory"))?,
            output_format: self.output_format.unwrap_or_default(),
            create_output_directory: self.create_output_directory.unwrap_or(false),
        })
    }
}
