use crate::core::models::document::{
    ExtractedSections, HeaderInfo, InputDocument, RawCoordinateLine, SectionLabel,
};
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const QUOTE_CHARS: [char; 2] = ['\'', '"'];

#[derive(Debug, Error)]
pub enum MorphologikaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    #[error("Missing required section: [{0}]")]
    MissingSection(SectionLabel),
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Invalid integer for [{label}] (value: '{value}')")]
    InvalidInt { label: SectionLabel, value: String },
    #[error("[{label}] is the last line; its value is missing")]
    MissingValue { label: SectionLabel },
    #[error("Invalid coordinate value '{value}'")]
    InvalidCoordinate { value: String },
    #[error("Expected 3 coordinates, found {found}")]
    TooFewCoordinates { found: usize },
}

/// Reader for Morphologika multi-subject landmark files.
pub struct MorphologikaFile;

impl MorphologikaFile {
    pub fn read_from(reader: &mut impl BufRead) -> Result<InputDocument, MorphologikaError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(InputDocument::new(lines))
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<InputDocument, MorphologikaError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Scans the header and extracts the names and raw-data sections in one call.
    pub fn parse(
        document: &InputDocument,
    ) -> Result<(HeaderInfo, ExtractedSections), MorphologikaError> {
        let header = scan_header(document)?;
        let sections = extract_sections(document, &header)?;
        Ok((header, sections))
    }
}

/// Locates the size fields and section starts.
///
/// Each line is tested against the labels in [`SectionLabel::ALL`] order and is
/// attributed to the first label it contains. A label seen again later
/// overwrites the earlier value.
pub fn scan_header(document: &InputDocument) -> Result<HeaderInfo, MorphologikaError> {
    let mut header = HeaderInfo::default();

    for (index, line) in document.lines().iter().enumerate() {
        let lowered = line.to_lowercase();
        let Some(label) = SectionLabel::ALL
            .into_iter()
            .find(|label| lowered.contains(label.keyword()))
        else {
            continue;
        };

        match label {
            SectionLabel::Individuals => {
                header.subject_count = Some(read_size_field(document, index, label)?);
            }
            SectionLabel::Landmarks => {
                header.landmark_count = Some(read_size_field(document, index, label)?);
            }
            SectionLabel::Dimensions => {
                header.dimension_count = Some(read_size_field(document, index, label)?);
            }
            SectionLabel::Names => header.names_section_start = Some(index),
            SectionLabel::RawPoints => header.raw_data_section_start = Some(index),
        }
        debug!("Found [{}] on line {}", label, index + 1);
    }

    Ok(header)
}

fn read_size_field(
    document: &InputDocument,
    label_index: usize,
    label: SectionLabel,
) -> Result<usize, MorphologikaError> {
    let value_line = label_index + 1;
    let value = document.line(value_line).ok_or(MorphologikaError::Parse {
        line: label_index + 1,
        kind: ParseErrorKind::MissingValue { label },
    })?;
    value.trim().parse().map_err(|_| MorphologikaError::Parse {
        line: value_line + 1,
        kind: ParseErrorKind::InvalidInt {
            label,
            value: value.trim().to_string(),
        },
    })
}

/// Slices the subject names and the filtered raw coordinate lines out of the
/// document.
///
/// Raw lines run from the line after `[rawpoints]` to the end of the file. Empty
/// lines and lines containing a quote (inline subject annotations) are dropped.
pub fn extract_sections(
    document: &InputDocument,
    header: &HeaderInfo,
) -> Result<ExtractedSections, MorphologikaError> {
    let names_start = header
        .names_section_start
        .ok_or(MorphologikaError::MissingSection(SectionLabel::Names))?;
    let raw_start = header
        .raw_data_section_start
        .ok_or(MorphologikaError::MissingSection(SectionLabel::RawPoints))?;

    let subject_count = header.subjects();
    let names_body = document.lines().get(names_start + 1..).unwrap_or(&[]);
    if names_body.len() < subject_count {
        return Err(MorphologikaError::Inconsistency(format!(
            "[names] declares {} individuals but only {} lines follow it",
            subject_count,
            names_body.len()
        )));
    }
    let subject_names = names_body[..subject_count]
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();

    let raw_lines = document
        .lines()
        .iter()
        .enumerate()
        .skip(raw_start + 1)
        .filter(|(_, line)| is_coordinate_line(line))
        .map(|(index, line)| RawCoordinateLine {
            line_number: index + 1,
            content: line.clone(),
        })
        .collect();

    Ok(ExtractedSections {
        subject_names,
        raw_lines,
    })
}

/// Whitespace-only lines count as data so that they surface as parse failures.
fn is_coordinate_line(line: &str) -> bool {
    !line.is_empty() && !line.contains(QUOTE_CHARS)
}

/// Parses the first three whitespace-delimited tokens of a raw line as x, y, z.
/// Any further tokens are ignored.
pub fn parse_coordinates(line: &str) -> Result<Point3<f64>, ParseErrorKind> {
    let mut tokens = line.split_whitespace();
    let mut coords = [0.0_f64; 3];
    for (found, slot) in coords.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or(ParseErrorKind::TooFewCoordinates { found })?;
        *slot = token
            .parse()
            .map_err(|_| ParseErrorKind::InvalidCoordinate {
                value: token.to_string(),
            })?;
    }
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// File-name identifier for a names-section line: its first whitespace-delimited
/// token with surrounding quote markers removed.
pub fn subject_identifier(name_line: &str) -> Option<&str> {
    name_line
        .split_whitespace()
        .next()
        .map(|token| token.trim_matches(QUOTE_CHARS))
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
[individuals]
2
[landmarks]
3
[dimensions]
3
[names]
Alpha
Beta extra annotation
[rawpoints]

'#1 Alpha
1.0 2.0 3.0
4.0 5.0 6.0
7.0 8.0 9.0

'#2 Beta
10.0 11.0 12.0
13.0 14.0 15.0 trailing
16.0 17.0 18.0
";

    fn sample_document() -> InputDocument {
        MorphologikaFile::read_from(&mut Cursor::new(SAMPLE)).unwrap()
    }

    #[test]
    fn scan_header_finds_all_fields() {
        let header = scan_header(&sample_document()).unwrap();
        assert_eq!(header.subject_count, Some(2));
        assert_eq!(header.landmark_count, Some(3));
        assert_eq!(header.dimension_count, Some(3));
        assert_eq!(header.names_section_start, Some(6));
        assert_eq!(header.raw_data_section_start, Some(9));
    }

    #[test]
    fn scan_header_is_case_insensitive_and_tolerates_padding() {
        let doc = InputDocument::from_text("INDIVIDUALS\n  7  \nLandMarks\n\t12\n");
        let header = scan_header(&doc).unwrap();
        assert_eq!(header.subject_count, Some(7));
        assert_eq!(header.landmark_count, Some(12));
        assert_eq!(header.dimension_count, None);
    }

    #[test]
    fn scan_header_last_match_wins() {
        let doc = InputDocument::from_text("[individuals]\n2\n[individuals]\n5\n");
        let header = scan_header(&doc).unwrap();
        assert_eq!(header.subject_count, Some(5));
    }

    #[test]
    fn scan_header_section_starts_follow_last_label() {
        let doc = InputDocument::from_text(
            "[names]\nA\n[rawpoints]\n1 2 3\n[Names]\nB\n[RawPoints]\n4 5 6\n",
        );
        let header = scan_header(&doc).unwrap();
        assert_eq!(header.names_section_start, Some(4));
        assert_eq!(header.raw_data_section_start, Some(6));
    }

    #[test]
    fn scan_header_attributes_line_to_first_label_in_priority_order() {
        let doc = InputDocument::from_text("[landmarks names]\n4\nnames of individuals\n2\n");
        let header = scan_header(&doc).unwrap();
        assert_eq!(header.landmark_count, Some(4));
        assert_eq!(header.subject_count, Some(2));
        assert_eq!(header.names_section_start, None);
    }

    #[test]
    fn scan_header_rejects_non_integer_size() {
        let doc = InputDocument::from_text("[landmarks]\nthree\n");
        let err = scan_header(&doc).unwrap_err();
        match err {
            MorphologikaError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(
                    kind,
                    ParseErrorKind::InvalidInt {
                        label: SectionLabel::Landmarks,
                        value: "three".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn scan_header_rejects_label_on_final_line() {
        let doc = InputDocument::from_text("[individuals]\n2\n[dimensions]");
        let err = scan_header(&doc).unwrap_err();
        assert!(matches!(
            err,
            MorphologikaError::Parse {
                line: 3,
                kind: ParseErrorKind::MissingValue {
                    label: SectionLabel::Dimensions
                }
            }
        ));
    }

    #[test]
    fn extract_filters_blank_and_quoted_lines() {
        let doc = sample_document();
        let (_, sections) = MorphologikaFile::parse(&doc).unwrap();

        assert_eq!(sections.subject_names, ["Alpha", "Beta extra annotation"]);
        assert_eq!(sections.raw_lines.len(), 6);
        assert_eq!(sections.raw_lines[0].content, "1.0 2.0 3.0");
        assert_eq!(sections.raw_lines[0].line_number, 13);
        assert_eq!(sections.raw_lines[4].content, "13.0 14.0 15.0 trailing");
    }

    #[test]
    fn extract_keeps_whitespace_only_lines() {
        let doc = InputDocument::from_text("[names]\nA\n[rawpoints]\n1 2 3\n   \n");
        let header = HeaderInfo {
            subject_count: Some(1),
            ..scan_header(&doc).unwrap()
        };
        let sections = extract_sections(&doc, &header).unwrap();
        assert_eq!(sections.raw_lines.len(), 2);
        assert_eq!(sections.raw_lines[1].content, "   ");
    }

    #[test]
    fn extract_requires_names_and_rawpoints() {
        let doc = InputDocument::from_text("[individuals]\n1\n[names]\nA\n");
        let header = scan_header(&doc).unwrap();
        let err = extract_sections(&doc, &header).unwrap_err();
        assert!(matches!(
            err,
            MorphologikaError::MissingSection(SectionLabel::RawPoints)
        ));
    }

    #[test]
    fn extract_rejects_truncated_names_section() {
        let doc = InputDocument::from_text("[rawpoints]\n1 2 3\n[names]\nA\n");
        let header = HeaderInfo {
            subject_count: Some(3),
            ..scan_header(&doc).unwrap()
        };
        let err = extract_sections(&doc, &header).unwrap_err();
        assert!(matches!(err, MorphologikaError::Inconsistency(_)));
    }

    #[test]
    fn parse_coordinates_ignores_extra_tokens() {
        let point = parse_coordinates("  1.5\t-2e1 3 label 99").unwrap();
        assert_eq!(point, Point3::new(1.5, -20.0, 3.0));
    }

    #[test]
    fn parse_coordinates_reports_failures() {
        assert_eq!(
            parse_coordinates("1.0 2.0"),
            Err(ParseErrorKind::TooFewCoordinates { found: 2 })
        );
        assert_eq!(
            parse_coordinates("   "),
            Err(ParseErrorKind::TooFewCoordinates { found: 0 })
        );
        assert_eq!(
            parse_coordinates("1.0 x 3.0"),
            Err(ParseErrorKind::InvalidCoordinate {
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn subject_identifier_takes_first_token_without_quotes() {
        assert_eq!(subject_identifier("Beta extra annotation"), Some("Beta"));
        assert_eq!(subject_identifier("'Gamma'  "), Some("Gamma"));
        assert_eq!(subject_identifier("   "), None);
        assert_eq!(subject_identifier("''"), None);
    }
}
