use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "namesmith")]
#[command(
    author,
    version,
    about = "Rename video files from their embedded identifier and looked-up metadata"
)]
pub struct Cli {
    /// Directory to scan recursively
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Apply the renames (default is a preview that changes nothing)
    #[arg(long)]
    pub execute: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Seconds to pause after each identified file (overrides the config)
    #[arg(long, value_name = "SECS")]
    pub lookup_delay: Option<u64>,
}
