use morphoconv::core::io::format::OutputFormat;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub output_directory: PathBuf,
    pub format: OutputFormat,
    pub create_output_directory: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("."),
            format: OutputFormat::Fcsv,
            create_output_directory: true,
        }
    }
}
