use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use morphoconv::workflows;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Inspecting {:?}", &args.input);
    let report = workflows::inspect::run(&args.input)?;

    println!("Individuals: {}", report.header.subjects());
    println!("Landmarks: {}", report.header.landmarks());
    println!("Dimensions: {}", report.header.dimensions());
    println!("Raw data lines: {}", report.raw_line_count);
    for (i, name) in report.subject_names.iter().enumerate() {
        println!("  {:>4}  {}", i + 1, name);
    }

    match report.problem {
        None => {
            println!("File can be converted.");
            Ok(())
        }
        Some(problem) => Err(CliError::Conversion(problem)),
    }
}
