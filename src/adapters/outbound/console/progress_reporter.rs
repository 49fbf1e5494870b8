use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing to stderr so
/// the CI log stays readable. Per-part progress uses an indicatif bar;
/// warnings are printed above the bar instead of tearing it.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: Option<usize>) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = match total {
            Some(total) => {
                let pb = ProgressBar::new(total as u64);
                let style = ProgressStyle::default_bar()
                    .template(BAR_TEMPLATE)
                    .map(|style| style.progress_chars("=>-"))
                    .unwrap_or_else(|_| ProgressStyle::default_bar());
                pb.set_style(style);
                pb
            }
            None => ProgressBar::new_spinner(),
        };
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
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
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: Option<usize>, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(format!("Fetching {}", msg));
        }
    }

    fn report_warning(&self, message: &str) {
        let line = format!("⚠️  {}", message);
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(line),
            None => eprintln!("{}", line),
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        eprintln!("✅ {}", message);
    }
}
