pub mod attendance_record;
pub mod candidate;
pub mod dashboard_stats;
pub mod department;
pub mod employee;
pub mod leave_request;
pub mod login_response;
pub mod overtime_request;
pub mod project;
pub mod salary_record;
pub mod task;
