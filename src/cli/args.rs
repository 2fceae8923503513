use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// fake-export — privacy-scrubbed replicas of personal data exports
#[derive(Parser, Debug)]
#[command(
    name = "fake-export",
    version,
    about = "Builds a privacy-scrubbed replica of a personal data export",
    long_about = "fake-export walks a data export, replaces every JSON value with a safe\n\
                   placeholder of the same type, and packs the result into a zip archive.",
    after_help = "EXAMPLES:\n  \
        fake-export -s ~/facebook-export                    Write /tmp/data.zip\n  \
        fake-export -s ./export -o ./fixtures/data.zip      Custom archive path\n  \
        fake-export -s ./export --format json               Print the run report as JSON\n  \
        fake-export -s ./export --config fake-export.toml   Defaults from a TOML file"
)]
pub struct Cli {
    /// Root of the data export to replicate
    #[arg(long = "source-directory", short = 's', value_name = "PATH")]
    pub source_directory: Option<String>,

    /// Where to write the zip archive [default: /tmp/data.zip]
    #[arg(long = "archive-file", short = 'o', value_name = "PATH")]
    pub archive_file: Option<String>,

    /// Parent directory for the per-run staging tree [default: /tmp]
    #[arg(long, value_name = "PATH")]
    pub staging_root: Option<String>,

    /// TOML file with defaults for archive_file and staging_root
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Quiet mode — print only the archive path
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Quiet,
}

impl Cli {
    /// Effective format; `--quiet` wins over `--format`
    pub fn output_format(&self) -> OutputFormat {
        if self.quiet {
            OutputFormat::Quiet
        } else {
            self.format
        }
    }
}
