use indicatif::{HumanDuration, ProgressBar};
use owo_colors::OwoColorize;
use std::time::{Duration, Instant};

use crate::ui::{theme, Icons};

/// Spinner shown while the feed is being fetched; hidden when stdout is not a terminal
pub struct Spinner {
    pb: ProgressBar,
    started: Instant,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let pb = if console::Term::stdout().is_term() {
            let pb = ProgressBar::new_spinner();
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        } else {
            ProgressBar::hidden()
        };
        pb.set_message(message.to_string());
        Self {
            pb,
            started: Instant::now(),
        }
    }

    /// Clear the spinner and print how long the phase took
    pub fn finish(&self, label: &str) {
        self.pb.finish_and_clear();
        println!(
            "{} {}",
            Icons::CHECK,
            format!("{} in {}", label, HumanDuration(self.started.elapsed()))
                .style(theme().header.clone())
        );
    }
}
