use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Option<i64>,
    pub tieu_de: Option<String>,
    pub mo_ta: Option<String>,
    pub ngay_bat_dau: Option<String>,
    pub han_hoan_thanh: Option<String>,
    pub trang_thai: Option<String>,
    pub nguoi_giao: Option<String>,
    pub nguoi_nhan: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskAssignment {
    pub tieu_de: String,
    pub mo_ta: Option<String>,
    pub id_nguoi_nhan: i64,
    pub han_hoan_thanh: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusUpdate {
    pub id: i64,
    pub trang_thai: String,
    pub ghi_chu: String,
}
