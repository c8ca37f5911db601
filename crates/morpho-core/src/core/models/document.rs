use std::fmt;

/// An ordered, immutable sequence of text lines loaded from a Morphologika file.
///
/// Line terminators (`\n` and `\r\n`) are stripped on load; every other character
/// is preserved so that the scanner and the extractor see the file verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputDocument {
    lines: Vec<String>,
}

impl InputDocument {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The labeled sections the header scanner looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    Individuals,
    Landmarks,
    Dimensions,
    Names,
    RawPoints,
}

impl SectionLabel {
    /// Labels in the order they are tested against each line.
    pub const ALL: [SectionLabel; 5] = [
        SectionLabel::Individuals,
        SectionLabel::Landmarks,
        SectionLabel::Dimensions,
        SectionLabel::Names,
        SectionLabel::RawPoints,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            SectionLabel::Individuals => "individuals",
            SectionLabel::Landmarks => "landmarks",
            SectionLabel::Dimensions => "dimensions",
            SectionLabel::Names => "names",
            SectionLabel::RawPoints => "rawpoints",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Scalar fields and section positions discovered by the header scanner.
///
/// Every field is `None` until its label is seen. Section starts are 0-based
/// indices of the label line itself; the section body begins on the next line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    pub subject_count: Option<usize>,
    pub landmark_count: Option<usize>,
    pub dimension_count: Option<usize>,
    pub names_section_start: Option<usize>,
    pub raw_data_section_start: Option<usize>,
}

impl HeaderInfo {
    pub fn subjects(&self) -> usize {
        self.subject_count.unwrap_or(0)
    }

    pub fn landmarks(&self) -> usize {
        self.landmark_count.unwrap_or(0)
    }

    pub fn dimensions(&self) -> usize {
        self.dimension_count.unwrap_or(0)
    }

    /// Number of raw coordinate lines the declared sizes call for, or `None`
    /// when the product does not fit in `usize`.
    pub fn expected_point_lines(&self) -> Option<usize> {
        self.subjects().checked_mul(self.landmarks())
    }
}

/// One non-blank, non-annotation line from the raw-data section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCoordinateLine {
    /// 1-based line number in the source file.
    pub line_number: usize,
    pub content: String,
}

/// Output of the extractor: subject names in file order and the flat stream of
/// coordinate lines in subject-major, landmark-minor order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSections {
    pub subject_names: Vec<String>,
    pub raw_lines: Vec<RawCoordinateLine>,
}
