use crate::ui::progress::create_spinner;
use indicatif::ProgressBar;

/// Spinner shown on stderr while a request is in flight. Hidden when
/// stdout is not a terminal.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let pb = if atty::is(atty::Stream::Stdout) {
            create_spinner(message)
        } else {
            ProgressBar::hidden()
        };
        Self { pb }
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
