use std::path::PathBuf;

use tracing::info;

use logoprep::api;
use logoprep::types::OutputFormat;

use super::args::{CliArgs, Command};
use super::errors::AppError;

fn run_crop(
    input: &PathBuf,
    outputs: &[PathBuf],
    margin: u32,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    api::crop_to_paths(input, margin, outputs, format)?;
    info!("Successfully processed: {:?}\n", input);
    Ok(())
}

fn run_convert(
    input: &PathBuf,
    outputs: &[PathBuf],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    api::convert_to_paths(input, outputs, format)?;
    info!("Successfully processed: {:?}\n", input);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match args.command {
        Command::Crop {
            input,
            output,
            margin,
            format,
        } => {
            if output.is_empty() {
                return Err(AppError::NoDestinations.into());
            }
            run_crop(&input, &output, margin, format)
        }
        Command::Convert {
            input,
            output,
            format,
        } => {
            if output.is_empty() {
                return Err(AppError::NoDestinations.into());
            }
            run_convert(&input, &output, format)
        }
    }
}
