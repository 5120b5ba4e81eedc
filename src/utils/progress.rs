use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress notifications from a running pipeline. Percentages are
/// non-decreasing over the lifetime of one request.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8, message: &str);
}

/// Sink that discards all notifications.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&self, _percent: u8, _message: &str) {}
}

/// Console progress bar spanning 0-100 percent.
pub struct ConsoleProgress {
    progress_bar: Option<ProgressBar>,
}

impl ConsoleProgress {
    pub fn new(silent: bool) -> Self {
        if silent {
            Self { progress_bar: None }
        } else {
            let pb = ProgressBar::new(100);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg}\n{spinner:.green} [{bar:40.cyan/blue}] {pos}%")
                    .unwrap()
                    .progress_chars("#>-"),
            );

            Self {
                progress_bar: Some(pb),
            }
        }
    }

    pub fn finish(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish();
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn report(&self, percent: u8, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_position(percent as u64);
            pb.set_message(message.to_string());
        }
    }
}

impl Drop for ConsoleProgress {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish();
        }
    }
}
