use crate::core::models::landmark::SubjectRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Defines the interface for per-subject landmark file formats.
///
/// Implementors serialize one [`SubjectRecord`] into their format. The output
/// must be a pure function of the record so that repeated conversions produce
/// byte-identical files.
pub trait LandmarkFile {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// File extension used for this format, without the leading dot.
    const EXTENSION: &'static str;

    /// Writes a subject record to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(record: &SubjectRecord, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes a subject record to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(record: &SubjectRecord, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(record, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
