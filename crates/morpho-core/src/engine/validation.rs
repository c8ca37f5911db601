use super::error::ConvertError;
use crate::core::io::morphologika::{parse_coordinates, subject_identifier};
use crate::core::models::document::{ExtractedSections, HeaderInfo, SectionLabel};
use nalgebra::Point3;
use std::collections::HashSet;
use std::path::{Component, Path};
use tracing::debug;

/// Only 3-component coordinates are converted.
pub const SUPPORTED_DIMENSIONS: usize = 3;

/// Input that passed every integrity check and is ready to emit.
///
/// Holds `subject_ids().len() * landmark_count()` coordinates in subject-major
/// order; [`ValidatedInput::new`] refuses anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    subject_ids: Vec<String>,
    landmark_count: usize,
    points: Vec<Point3<f64>>,
}

impl ValidatedInput {
    pub fn new(
        subject_ids: Vec<String>,
        landmark_count: usize,
        points: Vec<Point3<f64>>,
    ) -> Result<Self, ConvertError> {
        let subjects = subject_ids.len();
        let expected = subjects
            .checked_mul(landmark_count)
            .ok_or(ConvertError::SizeOverflow {
                subjects,
                landmarks: landmark_count,
            })?;
        if points.len() != expected {
            return Err(ConvertError::CountMismatch {
                expected,
                found: points.len(),
                subjects,
                landmarks: landmark_count,
            });
        }
        Ok(Self {
            subject_ids,
            landmark_count,
            points,
        })
    }

    pub fn subject_ids(&self) -> &[String] {
        &self.subject_ids
    }

    pub fn landmark_count(&self) -> usize {
        self.landmark_count
    }

    /// The landmarks of subject `index`, in input order.
    pub fn subject_points(&self, index: usize) -> &[Point3<f64>] {
        let start = index * self.landmark_count;
        &self.points[start..start + self.landmark_count]
    }
}

/// Accepts a subject identifier only if it names a single file inside the
/// output directory.
fn is_plain_file_name(id: &str) -> bool {
    if id.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Rejects headers whose size fields are unset or zero, or whose dimension
/// count is not 3.
pub fn validate_header(header: &HeaderInfo) -> Result<(), ConvertError> {
    let fields: Vec<SectionLabel> = [
        (SectionLabel::Individuals, header.subjects()),
        (SectionLabel::Landmarks, header.landmarks()),
        (SectionLabel::Dimensions, header.dimensions()),
    ]
    .into_iter()
    .filter(|(_, value)| *value == 0)
    .map(|(label, _)| label)
    .collect();

    if !fields.is_empty() {
        return Err(ConvertError::MissingSizeField { fields });
    }
    if header.dimensions() != SUPPORTED_DIMENSIONS {
        return Err(ConvertError::UnsupportedDimension(header.dimensions()));
    }
    Ok(())
}

/// Checks the extracted sections against the header and parses every coordinate.
///
/// The count check runs first, so a mismatched file is reported as such even
/// when some of its lines are also malformed.
pub fn validate_sections(
    header: &HeaderInfo,
    sections: &ExtractedSections,
) -> Result<ValidatedInput, ConvertError> {
    let expected = header
        .expected_point_lines()
        .ok_or(ConvertError::SizeOverflow {
            subjects: header.subjects(),
            landmarks: header.landmarks(),
        })?;
    let found = sections.raw_lines.len();
    if found != expected {
        return Err(ConvertError::CountMismatch {
            expected,
            found,
            subjects: header.subjects(),
            landmarks: header.landmarks(),
        });
    }

    let mut seen = HashSet::new();
    let mut subject_ids = Vec::with_capacity(sections.subject_names.len());
    for (index, name) in sections.subject_names.iter().enumerate() {
        let id = subject_identifier(name)
            .ok_or(ConvertError::InvalidSubjectName { index: index + 1 })?;
        if !is_plain_file_name(id) {
            return Err(ConvertError::UnsafeSubjectName {
                index: index + 1,
                name: id.to_string(),
            });
        }
        if !seen.insert(id) {
            return Err(ConvertError::DuplicateSubjectName {
                name: id.to_string(),
            });
        }
        subject_ids.push(id.to_string());
    }

    let points = sections
        .raw_lines
        .iter()
        .map(|raw| {
            parse_coordinates(&raw.content).map_err(|reason| {
                ConvertError::MalformedCoordinateLine {
                    line: raw.line_number,
                    content: raw.content.clone(),
                    reason,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Validated {} subject(s) with {} landmark(s) each.",
        subject_ids.len(),
        header.landmarks()
    );

    ValidatedInput::new(subject_ids, header.landmarks(), points)
}
