use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub id: Option<i64>,
    pub nhan_vien: Option<String>,
    pub thang: Option<u32>,
    pub nam: Option<i32>,
    pub luong_co_ban: Option<f64>,
    pub so_ngay_cong: Option<f64>,
    pub thuong: Option<f64>,
    pub phu_cap: Option<f64>,
    pub khau_tru: Option<f64>,
    pub tong_luong: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryPeriod {
    pub thang: u32,
    pub nam: i32,
}

/// Result of a bulk Excel import.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportSummary {
    pub success_count: u32,
    pub error_count: u32,
    pub errors: Vec<String>,
}

impl ImportSummary {
    pub const SHOWN_ERRORS: usize = 10;

    /// First few row errors, with a trailer counting the rest.
    pub fn error_details(&self) -> Vec<String> {
        let mut details: Vec<String> = self.errors.iter().take(Self::SHOWN_ERRORS).cloned().collect();
        if self.errors.len() > Self::SHOWN_ERRORS {
            details.push(format!("... và {} lỗi khác", self.errors.len() - Self::SHOWN_ERRORS));
        }
        details
    }
}
