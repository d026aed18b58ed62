use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: Option<i64>,
    pub ho_ten: Option<String>,
    pub ngay_bat_dau: Option<String>,
    pub ngay_ket_thuc: Option<String>,
    pub ly_do: Option<String>,
    pub trang_thai: Option<String>,
    pub nguoi_duyet: Option<String>,
    pub ngay_duyet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeavePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub ngay_bat_dau: String,
    pub ngay_ket_thuc: String,
    pub ly_do: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveReview {
    pub request_id: i64,
    pub is_approved: bool,
    pub note: String,
}
