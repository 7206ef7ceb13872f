//! cfid CLI - generate composite file identifiers for archival files.

use cfid::{IdConfig, Precision, fsmeta, output};
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cfid")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("cfid.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn config_from_cli(cli: &Cli) -> IdConfig {
    IdConfig {
        precision: Precision::from_level(cli.precision),
        context_limit: cli.context_length,
        random_length: cli.random_length,
        charset: cli
            .charset
            .as_deref()
            .unwrap_or(cfid::DEFAULT_CHARSET)
            .chars()
            .collect(),
        max_total_length: cli.max_length,
        replace_whitespace: cli.replace_whitespace,
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config_from_cli(&cli);

    let timestamp = fsmeta::creation_time(&cli.file_path)
        .with_context(|| format!("Failed to read timestamp of {}", cli.file_path.display()))?;
    let context = fsmeta::context_from_path(&cli.file_path);

    let id = cfid::make_cfid(timestamp, &context, &config).context("Failed to generate CFID")?;

    info!("Generated CFID for {}: {}", cli.file_path.display(), id);

    if cli.json {
        let rendered = output::render_json(&id).context("Failed to render JSON output")?;
        println!("{}", rendered);
    } else {
        println!("{}", output::render_plain(&id));
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
