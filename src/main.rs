use std::path::PathBuf;
use std::process::exit;

use chrono::Utc;
use clap::Parser;
use dwexport::{config::Config, export};
use log::trace;

/// Based on DataWarrior's "Molecule 3D" string, write the file
/// 'container.dwar' for an eventual structure export as a (3D) .sdf file. Only
/// one string is processed at a time. Note that an earlier 'container.dwar' in
/// the current directory is overwritten.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// The "Molecule 3D" string copied from DataWarrior's 3D-Structure window.
    /// It must be enclosed in single quotes so the shell passes the structure
    /// token, the separating space, and the coordinate token through intact.
    conformer: String,

    /// Optional TOML file overriding the output path or the creation stamp.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => {
            trace!("loading config from {}", path.display());
            match Config::load(&path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("error: {e}");
                    exit(1);
                }
            }
        }
        None => Config::default(),
    };

    let created = config.created_or(Utc::now());
    if let Err(e) = export(&cli.conformer, created, &config.output) {
        eprintln!("error: {e}");
        exit(1);
    }
}
