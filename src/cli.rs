//! Command-line interface definition

use std::path::PathBuf;

use clap::Parser;

/// Resource root used by a standard Android Gradle module
pub const DEFAULT_BASE_DIR: &str = "app/src/main/res";

/// Generate placeholder launcher icons for every mipmap density
#[derive(Debug, Parser)]
#[command(name = "launcher-icons", version, about)]
pub struct Cli {
    /// Resource directory that receives the mipmap-* folders
    #[arg(
        short = 'o',
        long,
        env = "LAUNCHER_ICONS_BASE_DIR",
        default_value = DEFAULT_BASE_DIR
    )]
    pub base_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub json_output: bool,
}

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    /// Directory creation or file write failed
    pub const IO_FAILURE: i32 = 2;
    /// Canvas could not be allocated
    pub const RENDER_FAILURE: i32 = 3;
}
