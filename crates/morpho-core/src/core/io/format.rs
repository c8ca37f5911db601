use super::delimited::CsvFile;
use super::fcsv::FcsvFile;
use super::traits::{LandmarkFile, WriteError};
use crate::core::models::landmark::SubjectRecord;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown output format '{0}'. Expected 'fcsv' or 'csv'.")]
pub struct UnknownFormatError(pub String);

/// Per-subject output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Fcsv,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Fcsv => FcsvFile::EXTENSION,
            OutputFormat::Csv => CsvFile::EXTENSION,
        }
    }

    pub fn write_to_path(self, record: &SubjectRecord, path: &Path) -> Result<(), WriteError> {
        match self {
            OutputFormat::Fcsv => FcsvFile::write_to_path(record, path),
            OutputFormat::Csv => CsvFile::write_to_path(record, path),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcsv" => Ok(OutputFormat::Fcsv),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(UnknownFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
