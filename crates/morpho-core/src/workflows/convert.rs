use crate::core::io::morphologika::{MorphologikaFile, extract_sections, scan_header};
use crate::core::models::document::{HeaderInfo, InputDocument};
use crate::engine::config::ConversionConfig;
use crate::engine::emitter;
use crate::engine::error::ConvertError;
use crate::engine::store::{FileStore, PointStore};
use crate::engine::validation;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionSummary {
    pub header: HeaderInfo,
    /// Output files in subject order.
    pub written: Vec<PathBuf>,
}

/// Converts the Morphologika file at `source` into one file per subject, in the
/// format and directory named by `config`.
#[instrument(skip_all, name = "convert_workflow", fields(source = %source.display()))]
pub fn run(source: &Path, config: &ConversionConfig) -> Result<ConversionSummary, ConvertError> {
    info!("Reading Morphologika file {:?}", source);
    let document = MorphologikaFile::read_from_path(source)?;
    let mut store = FileStore::new(config.output_format);
    run_with_store(&document, config, &mut store)
}

/// Runs the full pipeline over an already loaded document, saving through
/// `store`.
///
/// Every check (size fields, dimension, count, coordinate syntax, subject names)
/// completes before the first save, so a rejected input produces no output.
pub fn run_with_store<S: PointStore>(
    document: &InputDocument,
    config: &ConversionConfig,
    store: &mut S,
) -> Result<ConversionSummary, ConvertError> {
    let header = scan_header(document)?;
    info!("Individuals: {}", header.subjects());
    info!("Landmarks: {}", header.landmarks());
    info!("Dimensions: {}", header.dimensions());

    validation::validate_header(&header)?;
    let sections = extract_sections(document, &header)?;
    let validated = validation::validate_sections(&header, &sections)?;

    prepare_output_directory(config)?;
    let written = emitter::emit(&validated, &config.output_directory, store)?;

    info!("Processing completed: {} subject file(s) written.", written.len());
    Ok(ConversionSummary { header, written })
}

fn prepare_output_directory(config: &ConversionConfig) -> Result<(), ConvertError> {
    let path = &config.output_directory;
    if config.create_output_directory {
        std::fs::create_dir_all(path).map_err(|source| ConvertError::OutputDirectory {
            path: path.clone(),
            source,
        })?;
    } else if !path.is_dir() {
        return Err(ConvertError::OutputDirectory {
            path: path.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "directory does not exist",
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::format::OutputFormat;
    use crate::engine::config::ConversionConfigBuilder;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "\
[individuals]
2
[landmarks]
3
[dimensions]
3
[names]
Alpha
Beta
";

    const RAW_POINTS: &str = "\
[rawpoints]
1.0 2.0 3.0
4.0 5.0 6.0
7.0 8.0 9.0
10.0 11.0 12.0
13.0 14.0 15.0
16.0 17.0 18.0
";

    fn config_for(dir: &TempDir, format: OutputFormat) -> ConversionConfig {
        ConversionConfigBuilder::new()
            .output_directory(dir.path().to_path_buf())
            .output_format(format)
            .build()
            .unwrap()
    }

    fn output_files(dir: &TempDir) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn data_rows(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .filter(|l| !l.starts_with('#'))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn converts_two_subjects_into_two_files() {
        let input_dir = tempfile::tempdir().unwrap();
        let source = input_dir.path().join("sample.txt");
        fs::write(&source, format!("{HEADER}{RAW_POINTS}")).unwrap();
        let out = tempfile::tempdir().unwrap();

        let summary = run(&source, &config_for(&out, OutputFormat::Fcsv)).unwrap();

        assert_eq!(output_files(&out), ["Alpha.fcsv", "Beta.fcsv"]);
        assert_eq!(summary.written[0], out.path().join("Alpha.fcsv"));
        assert_eq!(summary.header.subject_count, Some(2));

        let alpha = data_rows(&out.path().join("Alpha.fcsv"));
        assert_eq!(alpha.len(), 3);
        assert!(alpha[0].starts_with("vtkMRMLMarkupsFiducialNode_1,1,2,3,"));
        assert!(alpha[2].starts_with("vtkMRMLMarkupsFiducialNode_3,7,8,9,"));
        assert!(alpha[2].ends_with(",2,,"));

        let beta = data_rows(&out.path().join("Beta.fcsv"));
        assert!(beta[0].starts_with("vtkMRMLMarkupsFiducialNode_1,10,11,12,"));
        assert!(beta[2].starts_with("vtkMRMLMarkupsFiducialNode_3,16,17,18,"));
    }

    #[test]
    fn count_mismatch_writes_nothing() {
        let truncated = RAW_POINTS.lines().take(6).collect::<Vec<_>>().join("\n");
        let document = InputDocument::from_text(&format!("{HEADER}{truncated}"));
        let out = tempfile::tempdir().unwrap();
        let config = config_for(&out, OutputFormat::Fcsv);

        let err = run_with_store(&document, &config, &mut FileStore::default()).unwrap_err();

        assert!(matches!(
            err,
            ConvertError::CountMismatch {
                expected: 6,
                found: 5,
                ..
            }
        ));
        assert!(output_files(&out).is_empty());
    }

    #[test]
    fn malformed_line_anywhere_writes_nothing() {
        let broken = RAW_POINTS.replace("16.0 17.0 18.0", "16.0 oops 18.0");
        let document = InputDocument::from_text(&format!("{HEADER}{broken}"));
        let out = tempfile::tempdir().unwrap();

        let err = run_with_store(
            &document,
            &config_for(&out, OutputFormat::Fcsv),
            &mut FileStore::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConvertError::MalformedCoordinateLine { line: 16, .. }
        ));
        assert!(output_files(&out).is_empty());
    }

    #[test]
    fn missing_size_field_is_fatal() {
        let document = InputDocument::from_text(&format!(
            "{}{RAW_POINTS}",
            HEADER.replace("[dimensions]\n3\n", "")
        ));
        let out = tempfile::tempdir().unwrap();

        let err = run_with_store(
            &document,
            &config_for(&out, OutputFormat::Fcsv),
            &mut FileStore::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::MissingSizeField { .. }));
        assert!(output_files(&out).is_empty());
    }

    #[test]
    fn file_names_use_first_token_of_subject_line() {
        let header = HEADER.replace("Beta\n", "Beta   collected 2019\n");
        let document = InputDocument::from_text(&format!("{header}{RAW_POINTS}"));
        let out = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(OutputFormat::Csv);

        run_with_store(&document, &config_for(&out, OutputFormat::Csv), &mut store).unwrap();

        assert_eq!(output_files(&out), ["Alpha.csv", "Beta.csv"]);
    }

    #[test]
    fn repeated_conversion_is_byte_identical() {
        let document = InputDocument::from_text(&format!("{HEADER}{RAW_POINTS}"));
        let out = tempfile::tempdir().unwrap();
        let config = config_for(&out, OutputFormat::Fcsv);

        run_with_store(&document, &config, &mut FileStore::default()).unwrap();
        let first = fs::read(out.path().join("Beta.fcsv")).unwrap();
        run_with_store(&document, &config, &mut FileStore::default()).unwrap();
        let second = fs::read(out.path().join("Beta.fcsv")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn quoted_annotations_do_not_change_output() {
        let annotated = "\
[rawpoints]
'#1 Alpha
1.0 2.0 3.0
4.0 5.0 6.0
7.0 8.0 9.0

\"#2 Beta\"
10.0 11.0 12.0
13.0 14.0 15.0
16.0 17.0 18.0
";
        let plain_out = tempfile::tempdir().unwrap();
        let annotated_out = tempfile::tempdir().unwrap();

        run_with_store(
            &InputDocument::from_text(&format!("{HEADER}{RAW_POINTS}")),
            &config_for(&plain_out, OutputFormat::Fcsv),
            &mut FileStore::default(),
        )
        .unwrap();
        run_with_store(
            &InputDocument::from_text(&format!("{HEADER}{annotated}")),
            &config_for(&annotated_out, OutputFormat::Fcsv),
            &mut FileStore::default(),
        )
        .unwrap();

        for name in ["Alpha.fcsv", "Beta.fcsv"] {
            assert_eq!(
                fs::read(plain_out.path().join(name)).unwrap(),
                fs::read(annotated_out.path().join(name)).unwrap()
            );
        }
    }

    #[test]
    fn output_directory_is_created_when_requested() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        let document = InputDocument::from_text(&format!("{HEADER}{RAW_POINTS}"));

        let strict = ConversionConfigBuilder::new()
            .output_directory(nested.clone())
            .build()
            .unwrap();
        let err = run_with_store(&document, &strict, &mut FileStore::default()).unwrap_err();
        assert!(matches!(err, ConvertError::OutputDirectory { .. }));

        let creating = ConversionConfigBuilder::new()
            .output_directory(nested.clone())
            .create_output_directory(true)
            .build()
            .unwrap();
        run_with_store(&document, &creating, &mut FileStore::default()).unwrap();
        assert!(nested.join("Alpha.fcsv").is_file());
    }
}
