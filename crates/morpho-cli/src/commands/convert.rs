use crate::cli::ConvertArgs;
use crate::config;
use crate::error::Result;
use morphoconv::core::io::morphologika::{MorphologikaFile, scan_header};
use morphoconv::engine::error::ConvertError;
use morphoconv::engine::store::FileStore;
use morphoconv::workflows;
use std::io::{self, Write};
use tracing::info;

pub fn run(args: ConvertArgs) -> Result<()> {
    run_with_output(args, &mut io::stdout().lock())
}

/// Reports the declared counts before converting, so they are shown even when
/// the file is rejected afterwards.
fn run_with_output(args: ConvertArgs, out: &mut impl Write) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = config::build_config(&args)?;
    let core_config = &app_config.core_config;

    writeln!(
        out,
        "Converting {} into {} file(s) under {}",
        app_config.input_path.display(),
        core_config.output_format,
        core_config.output_directory.display()
    )?;

    let document =
        MorphologikaFile::read_from_path(&app_config.input_path).map_err(ConvertError::from)?;
    let header = scan_header(&document).map_err(ConvertError::from)?;
    writeln!(out, "Individuals: {}", header.subjects())?;
    writeln!(out, "Landmarks: {}", header.landmarks())?;
    writeln!(out, "Dimensions: {}", header.dimensions())?;
    out.flush()?;

    let mut store = FileStore::new(core_config.output_format);
    let summary = workflows::convert::run_with_store(&document, core_config, &mut store)?;

    for path in &summary.written {
        writeln!(out, "  ✓ {}", path.display())?;
    }
    writeln!(
        out,
        "Processing completed: {} subject file(s) written.",
        summary.written.len()
    )?;

    Ok(())
}
