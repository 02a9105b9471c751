use crate::enrichment::domain::LookupOutcome;
use crate::ports::outbound::{LookupProgress, ProgressReporter};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr. Uses indicatif for the progress bar and
/// owo-colors for the per-lookup outcome.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.clone()
        } else {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}",
                    )
                    .expect("Failed to set progress bar template")
                    .progress_chars("=>-"),
            );
            *pb_option = Some(pb.clone());
            pb
        }
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    /// Status line for one lookup, e.g. `2/5 CVE-2021-44228 -- Success`
    pub fn progress_line(progress: &LookupProgress) -> String {
        format!(
            "{}/{} {} -- {}",
            progress.index,
            progress.total,
            progress.cve_id,
            Self::colored_label(&progress.outcome)
        )
    }

    fn colored_label(outcome: &LookupOutcome) -> String {
        let label = outcome.label();
        match outcome {
            LookupOutcome::Success => label.green().to_string(),
            LookupOutcome::NotFound => label.yellow().to_string(),
            LookupOutcome::Error(_) => label.red().to_string(),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_started(&self, total: usize) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_length(total as u64);
        pb.set_position(0);
    }

    fn report_progress(&self, progress: &LookupProgress) {
        let pb = self.get_or_create_progress_bar(progress.total);
        pb.set_position(progress.index as u64);
        pb.set_message(Self::progress_line(progress));
    }

    fn report_error(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(message.yellow().to_string()),
            None => eprintln!("{}", message.yellow()),
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}
