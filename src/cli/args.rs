use clap::{Parser, Subcommand};
use std::path::PathBuf;

use logoprep::DEFAULT_MARGIN;
use logoprep::types::OutputFormat;

#[derive(Parser)]
#[command(name = "logoprep", version, about = "LOGOPREP CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Trim a fixed-width border off every edge and write the result to each destination
    Crop {
        /// Input image file
        #[arg(short, long)]
        input: PathBuf,

        /// Destination path; repeat to write the same result to several places
        #[arg(short, long)]
        output: Vec<PathBuf>,

        /// Border width in pixels removed from each edge
        #[arg(short, long, default_value_t = DEFAULT_MARGIN)]
        margin: u32,

        /// Output encoding, applied regardless of destination file extension
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Png)]
        format: OutputFormat,
    },

    /// Re-encode an image under a different format and write it to each destination
    Convert {
        /// Input image file
        #[arg(short, long)]
        input: PathBuf,

        /// Destination path; repeat to write the same result to several places
        #[arg(short, long)]
        output: Vec<PathBuf>,

        /// Output encoding, applied regardless of destination file extension
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Png)]
        format: OutputFormat,
    },
}
