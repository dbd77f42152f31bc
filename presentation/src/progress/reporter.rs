//! Spinner and summary output around a dictionary load.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use noitu_application::LoadReport;
use std::future::Future;
use std::time::Duration;

/// Wraps a load in a spinner and prints the per-source summary.
pub struct LoadReporter {
    quiet: bool,
}

impl LoadReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    /// Drive `load` to completion, showing a spinner unless quiet, then
    /// print the summary.
    pub async fn run<Fut>(&self, load: Fut) -> LoadReport
    where
        Fut: Future<Output = LoadReport>,
    {
        let spinner = (!self.quiet).then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_message("Scanning dictionary sources...");
            pb.enable_steady_tick(Duration::from_millis(80));
            pb
        });

        let report = load.await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        if !self.quiet {
            println!("{}", Self::summary(&report));
        }

        report
    }

    /// One line per source plus the total.
    pub fn summary(report: &LoadReport) -> String {
        let mut out = String::new();
        for source in &report.sources {
            match &source.error {
                None => out.push_str(&format!(
                    "  {} {}: {} words ({} skipped)\n",
                    "v".green(),
                    source.source,
                    source.accepted,
                    source.skipped
                )),
                Some(error) => out.push_str(&format!(
                    "  {} {}: {}\n",
                    "x".red(),
                    source.source,
                    error
                )),
            }
        }
        out.push_str(&format!(
            "Dictionary ready: {} words",
            report.total.to_string().bold()
        ));
        out
    }
}
