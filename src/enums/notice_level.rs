use serde::{Deserialize, Serialize};

/// Severity of a user-facing notice. Maps to the toast colours of the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Danger,
}

impl NoticeLevel {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Danger => "❌",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub fn ansi_color(&self) -> &'static str {
        match self {
            Self::Success => "\x1b[32m",
            Self::Warning => "\x1b[33m",
            Self::Danger => "\x1b[31m",
        }
    }
}
