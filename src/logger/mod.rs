pub mod record_logger;
pub mod table_renderer;
pub mod terminal_notifier;
