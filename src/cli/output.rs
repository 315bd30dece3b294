//! Terminal output for the resolve command

use crate::cli::args::VerbosityLevel;
use crate::core::{DownloadResult, Media};
use colored::Colorize;
use std::time::Duration;

/// Output formatter for ttget
pub struct OutputFormatter {
    verbosity: VerbosityLevel,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self { verbosity }
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.verbosity != VerbosityLevel::Quiet {
            eprintln!("{} {}", "info:".cyan().bold(), message);
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    /// Print a resolved link.
    ///
    /// The URL alone goes to stdout so the command can be piped; details go
    /// to stderr.
    pub fn print_result(&self, result: &DownloadResult, elapsed: Duration) {
        if self.verbosity != VerbosityLevel::Quiet {
            let kind = match result.media {
                Media::Video(_) => "video",
                Media::Audio(_) => "audio",
            };
            eprintln!(
                "{} {} link ({}) in {}",
                "resolved".green().bold(),
                kind,
                result.quality,
                format_duration(elapsed)
            );
        }
        println!("{}", result.media.url());
    }
}

/// Format a short duration as human-readable string
fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.1}s", duration.as_secs_f64())
    }
}
