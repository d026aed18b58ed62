use std::io::{self, Write};
use crate::enums::notice_level::NoticeLevel;
use crate::traits::notifier::Notifier;

const RESET: &str = "\x1b[0m";

/// Prints notices to stderr, the terminal stand-in for a toast.
#[derive(Debug, Clone, Copy)]
pub struct TerminalNotifier {
    color: bool,
}

impl TerminalNotifier {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn format(&self, message: &str, level: NoticeLevel) -> String {
        if self.color {
            format!("{}{} {}{}", level.ansi_color(), level.emoji(), message, RESET)
        } else {
            format!("{} {}", level.emoji(), message)
        }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, level: NoticeLevel) {
        log::debug!("notice [{}] {}", level.name(), message);

        let mut stderr = io::stderr().lock();
        if writeln!(stderr, "{}", self.format(message, level)).is_err() {
            log::warn!("Could not write notice to stderr: {}", message);
        }
    }
}
