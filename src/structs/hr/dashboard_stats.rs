use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalary {
    pub thang: Option<u32>,
    pub nam: Option<i32>,
    pub tong_luong: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyLeave {
    pub thang: Option<u32>,
    pub nam: Option<i32>,
    pub so_ngay_nghi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyAttendance {
    pub ngay: Option<String>,
    pub dung_gio: Option<i64>,
    pub tong: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusCount {
    pub trang_thai: Option<String>,
    pub so_luong: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeOvertime {
    pub ten_nhan_vien: Option<String>,
    pub tong_gio_ot: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub salary_by_month: Vec<MonthlySalary>,
    pub leave_by_month: Vec<MonthlyLeave>,
    pub attendance_last7_days: Vec<DailyAttendance>,
    pub task_status: Vec<TaskStatusCount>,
    pub overtime_by_employee: Vec<EmployeeOvertime>,
}

impl DashboardStats {
    pub fn open_tasks(&self) -> i64 {
        self.task_status.iter().map(|entry| entry.so_luong.unwrap_or(0)).sum()
    }
}

/// Admin dashboard summary cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSummary {
    pub total_staff: usize,
    pub stats: Option<DashboardStats>,
}

impl DashboardSummary {
    pub fn salary_months(&self) -> usize {
        self.stats.as_ref().map_or(0, |stats| stats.salary_by_month.len())
    }

    pub fn open_tasks(&self) -> i64 {
        self.stats.as_ref().map_or(0, DashboardStats::open_tasks)
    }
}
