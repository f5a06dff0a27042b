use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use zengin_select_core::config::Config;
use zengin_select_core::{generate, sink, unclassified, Result, SourceLoader};

mod args;
use args::Cli;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = Config::path(Path::new("."));
    let config = Config::load(&config_path)?;
    debug!(path = %config_path.display(), "loaded config");

    let loader = SourceLoader::new()?;
    let collection = loader.load(&config.source.source())?;
    if collection.is_empty() {
        warn!("source contained no banks");
    }

    let dropped = unclassified(&collection);
    if !dropped.is_empty() {
        debug!(
            count = dropped.len(),
            codes = ?dropped.iter().map(|b| b.code.as_str()).collect::<Vec<_>>(),
            "banks with readings outside the syllable table are omitted from the tree"
        );
    }

    let artifacts = generate(&collection, &config.primary)?;

    sink::write_json(&cli.output1, &artifacts.navigation, config.output.pretty)?;
    sink::write_json(&cli.output2, &artifacts.primary, config.output.pretty)?;

    println!(
        "{} {} ({} banks)",
        "Wrote:".green(),
        cli.output1.display(),
        artifacts.navigation.bank_count()
    );
    println!(
        "{} {} ({} banks)",
        "Wrote:".green(),
        cli.output2.display(),
        artifacts.primary.len()
    );

    Ok(())
}
