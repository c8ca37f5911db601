use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::ConvertArgs;
use crate::error::{CliError, Result};
use morphoconv::engine::config::ConversionConfigBuilder;
use std::path::PathBuf;

pub fn build_config(args: &ConvertArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut merged = FileConfig {
        output_directory: args.output_dir.clone().or(file_config.output_directory),
        format: args.format.or(file_config.format),
        create_output_directory: if args.no_create_dir {
            Some(false)
        } else {
            file_config.create_output_directory
        },
    };
    apply_set_values(&mut merged, &args.set_values)?;

    let core_config = ConversionConfigBuilder::new()
        .output_directory(
            merged
                .output_directory
                .unwrap_or(defaults.output_directory),
        )
        .output_format(merged.format.unwrap_or(defaults.format))
        .create_output_directory(
            merged
                .create_output_directory
                .unwrap_or(defaults.create_output_directory),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        core_config,
    })
}

fn apply_set_values(config: &mut FileConfig, set_values: &[String]) -> Result<()> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "output-directory" => {
                config.output_directory = Some(PathBuf::from(value_str));
            }
            "format" => {
                config.format = Some(value_str.parse().map_err(|e| {
                    CliError::Config(format!("Invalid value for {}: {}", key, e))
                })?);
            }
            "create-output-directory" => {
                config.create_output_directory = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(())
}
