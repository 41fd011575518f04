use indicatif::{ProgressBar, ProgressStyle};

use crate::progress::{ProgressEvent, ProgressSink, Stage};

/// Renders pipeline progress events as a terminal bar.
pub struct ProgressDisplay {
    bar: ProgressBar,
}

impl ProgressDisplay {
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        let style = ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}%")
            .expect("valid template")
            .progress_chars("●○ ");

        bar.set_style(style);

        Self { bar }
    }
}

impl Default for ProgressDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressDisplay {
    fn emit(&mut self, event: ProgressEvent) {
        match event.stage {
            Stage::Complete => {
                self.bar.set_position(100);
                self.bar.finish_with_message(event.message);
            }
            Stage::Error => self.bar.abandon_with_message(event.message),
            Stage::Reading | Stage::Deriving | Stage::Decrypting => {
                self.bar.set_position(u64::from(event.percent));
                self.bar.set_message(event.message);
            }
        }
    }
}

impl Drop for ProgressDisplay {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish();
        }
    }
}
