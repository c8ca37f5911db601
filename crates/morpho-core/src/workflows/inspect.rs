use crate::core::io::morphologika::{MorphologikaFile, extract_sections, scan_header};
use crate::core::models::document::{HeaderInfo, InputDocument};
use crate::engine::error::ConvertError;
use crate::engine::validation;
use std::path::Path;
use tracing::{info, instrument, warn};

/// What a dry run found in a Morphologika file.
#[derive(Debug)]
pub struct InspectReport {
    pub header: HeaderInfo,
    pub subject_names: Vec<String>,
    /// Raw data lines left after dropping blank and quoted lines.
    pub raw_line_count: usize,
    /// The first check that failed, if any.
    pub problem: Option<ConvertError>,
}

impl InspectReport {
    pub fn is_convertible(&self) -> bool {
        self.problem.is_none()
    }
}

#[instrument(skip_all, name = "inspect_workflow", fields(source = %source.display()))]
pub fn run(source: &Path) -> Result<InspectReport, ConvertError> {
    let document = MorphologikaFile::read_from_path(source)?;
    run_document(&document)
}

/// Scans and validates `document` without writing anything.
///
/// Only a file that cannot be read or scanned at all is an `Err`; every later
/// failure is recorded in [`InspectReport::problem`].
pub fn run_document(document: &InputDocument) -> Result<InspectReport, ConvertError> {
    let header = scan_header(document)?;
    info!("Individuals: {}", header.subjects());
    info!("Landmarks: {}", header.landmarks());
    info!("Dimensions: {}", header.dimensions());

    let mut report = InspectReport {
        header,
        subject_names: Vec::new(),
        raw_line_count: 0,
        problem: None,
    };

    if let Err(problem) = check(document, &mut report) {
        warn!("Input is not convertible: {}", problem);
        report.problem = Some(problem);
    }
    Ok(report)
}

fn check(document: &InputDocument, report: &mut InspectReport) -> Result<(), ConvertError> {
    validation::validate_header(&report.header)?;
    let sections = extract_sections(document, &report.header)?;
    report.subject_names = sections.subject_names.clone();
    report.raw_line_count = sections.raw_lines.len();
    validation::validate_sections(&report.header, &sections)?;
    Ok(())
}
