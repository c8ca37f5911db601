use morphoconv::engine::config::ConversionConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub core_config: ConversionConfig,
}
