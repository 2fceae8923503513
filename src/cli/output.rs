use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use crate::archiver::{Progress, RunReport};
use crate::common::format::{self, format_count, format_duration, format_size, print_kv};

/// Console progress for human output: a spinner while documents are
/// redacted, then one line per archived entry.
pub struct ConsoleProgress {
    spinner: Option<ProgressBar>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} Redacting {pos} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self {
            spinner: Some(spinner),
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn document_redacted(&mut self, source: &Path, _staged: &Path, redacted: usize) {
        if let Some(ref pb) = self.spinner {
            pb.set_position(redacted as u64);
            pb.set_message(format::shorten_path(source, 50));
        }
    }

    fn entry_archived(&mut self, staged: &Path, entry: &str, archived: usize, total: usize) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        println!(
            "  {} {} -> {} ({} / {})",
            "Archive".green(),
            staged.display().to_string().dimmed(),
            entry.cyan(),
            archived,
            total
        );
    }
}

impl Drop for ConsoleProgress {
    fn drop(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

/// Print the run summary in human-readable format
pub fn print_report(report: &RunReport) {
    format::print_header("fake-export Summary");
    print_kv("Source", &report.source_dir.display().to_string());
    print_kv("Staging tree", &report.staging_dir.display().to_string());
    print_kv("Redacted", &format_count(report.json_files, "document"));
    if report.skipped_files > 0 {
        print_kv("Skipped", &format_count(report.skipped_files, "non-JSON file"));
    }
    if report.skipped_vcs_dirs > 0 {
        print_kv(
            "Pruned",
            &format_count(report.skipped_vcs_dirs, "version-control dir"),
        );
    }
    print_kv(
        "Archive",
        &format!(
            "{} ({}, {})",
            format_count(report.archived_entries, "file"),
            format_size(report.archive_bytes),
            format_duration(report.duration_secs)
        ),
    );
    println!();
    println!(
        "Archive file is generated at: {}",
        report.archive_file.display().to_string().bold()
    );
}

/// Print the run summary as JSON
pub fn print_report_json(report: &RunReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }
}

/// Print only the archive path
pub fn print_report_quiet(report: &RunReport) {
    println!("{}", report.archive_file.display());
}
