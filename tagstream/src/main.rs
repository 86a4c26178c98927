use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::warn;
use tagstream::{Config, check, clean_playlist, load_config};

#[derive(Parser)]
#[command(name = "tagstream")]
#[command(about = "Cleans and tags IPTV m3u playlists", long_about = None)]
struct Cli {
    /// Input m3u file (liste.m3u)
    file: PathBuf,

    /// Verify entry URLs with HEAD requests after writing
    #[arg(long)]
    check: bool,

    /// Optional YAML config for the URL check (timeout, user agent)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let (out_path, lines) = clean_playlist(&cli.file)?;
    println!("Wrote {}", out_path.display());

    if cli.check {
        match check::run_check(&lines, &config) {
            Ok(report) => print_report(&report),
            Err(e) => warn!("URL check skipped: {}", e),
        }
    }

    Ok(())
}

fn print_report(report: &check::CheckReport) {
    println!("OK: {}/{}", report.ok, report.total);
    if !report.bad.is_empty() {
        println!("Bad entries:");
        for (extinf, reason) in &report.bad {
            println!("- {} -> {}", extinf, reason);
        }
    }
}
