//! launcher-icons - placeholder Android launcher icon generator
//!
//! Renders a blue disc with a white dot and ring at every mipmap density
//! and writes `ic_launcher.png` / `ic_launcher_round.png` for each one.

mod cli;
mod density;
mod error;
mod generator;
mod icon;
mod logging;

use clap::Parser;
use cli::{exit_codes, Cli};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    match generator::generate_all(&cli.base_dir) {
        Ok(_) => exit_codes::SUCCESS,
        Err(e) => {
            tracing::error!("Icon generation aborted: {}", e);
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}
