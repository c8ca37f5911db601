use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::io::morphologika::{MorphologikaError, ParseErrorKind};
use crate::core::models::document::SectionLabel;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Error reading file: {0}")]
    Read(#[from] MorphologikaError),

    #[error("Error reading file: can not read size of {}", join_labels(.fields))]
    MissingSizeField { fields: Vec<SectionLabel> },

    #[error("Unsupported dimension count {0}: only 3D landmarks can be converted")]
    UnsupportedDimension(usize),

    #[error(
        "Error reading file: incorrect landmark number (expected {expected} = {subjects} individuals x {landmarks} landmarks, found {found})"
    )]
    CountMismatch {
        expected: usize,
        found: usize,
        subjects: usize,
        landmarks: usize,
    },

    #[error(
        "Error reading file: {subjects} individuals x {landmarks} landmarks is more points than can be addressed"
    )]
    SizeOverflow { subjects: usize, landmarks: usize },

    #[error("Malformed coordinate line {line} ('{content}'): {reason}")]
    MalformedCoordinateLine {
        line: usize,
        content: String,
        reason: ParseErrorKind,
    },

    #[error("Subject #{index} has no usable name in the [names] section")]
    InvalidSubjectName { index: usize },

    #[error("Subject #{index} name '{name}' is not a plain file name")]
    UnsafeSubjectName { index: usize, name: String },

    #[error("Subject name '{name}' appears more than once; output files would collide")]
    DuplicateSubjectName { name: String },

    #[error("Output directory {path:?} is not usable: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to save subject '{subject}' to {path:?}: {source}")]
    PersistenceFailure {
        subject: String,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn join_labels(labels: &[SectionLabel]) -> String {
    labels
        .iter()
        .map(|label| format!("[{}]", label))
        .collect::<Vec<_>>()
        .join(", ")
}
