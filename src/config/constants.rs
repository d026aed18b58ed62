use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5111/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_DIR_NAME: &str = ".hrdesk";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SESSION_FILE_NAME: &str = "session.toml";

pub const API_URL_ENV: &str = "HRDESK_API_URL";

pub const DEFAULT_OVERTIME_FACTOR: f64 = 1.5;
pub const DEFAULT_PROJECT_STATUS: &str = "Đang thực hiện";
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Roles that see the admin dashboard.
pub const ADMIN_ROLES: [&str; 2] = ["Admin", "QuanTri"];

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
