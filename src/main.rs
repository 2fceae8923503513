use anyhow::Result;
use clap::Parser;

use fake_export::archiver::{self, Progress, Silent};
use fake_export::cli::args::{Cli, OutputFormat};
use fake_export::cli::output::{self, ConsoleProgress};
use fake_export::common::config::{Config, RunOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("fake_export=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let config = Config::load(cli.config.as_deref())?;
    let options = RunOptions::resolve(
        cli.source_directory.as_deref(),
        cli.archive_file.as_deref(),
        cli.staging_root.as_deref(),
        &config,
    )?;

    let format = cli.output_format();
    let mut progress: Box<dyn Progress> = match format {
        OutputFormat::Human => Box::new(ConsoleProgress::new()),
        OutputFormat::Json | OutputFormat::Quiet => Box::new(Silent),
    };

    let report = archiver::run(&options, progress.as_mut())?;
    drop(progress);

    match format {
        OutputFormat::Human => output::print_report(&report),
        OutputFormat::Json => output::print_report_json(&report),
        OutputFormat::Quiet => output::print_report_quiet(&report),
    }

    Ok(())
}
