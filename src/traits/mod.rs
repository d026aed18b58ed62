pub mod navigator;
pub mod notifier;
