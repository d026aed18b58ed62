use crate::structs::hr::attendance_record::AttendanceRecord;
use crate::structs::hr::dashboard_stats::DashboardSummary;

/// What `dashboard` shows, decided by the role of the logged-in user.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Admin(DashboardSummary),
    /// Today's attendance; `None` until the employee checks in.
    Employee(Option<AttendanceRecord>),
}
