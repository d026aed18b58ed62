pub mod api_error;
pub mod badge_style;
pub mod candidate_stage;
pub mod commands;
pub mod dashboard_view;
pub mod notice_level;
pub mod task_status;
