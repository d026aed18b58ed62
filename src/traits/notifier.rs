use crate::enums::notice_level::NoticeLevel;

/// Sink for transient user-facing notices (the toast of the web client).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, level: NoticeLevel);
}
