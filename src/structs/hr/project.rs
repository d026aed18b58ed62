use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Option<i64>,
    pub ten_du_an: Option<String>,
    pub mo_ta: Option<String>,
    pub ngay_bat_dau: Option<String>,
    pub ngay_ket_thuc: Option<String>,
    pub trang_thai: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Create/update payload. The backend binds these keys in PascalCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub ten_du_an: String,
    pub ngay_bat_dau: Option<String>,
    pub ngay_ket_thuc: Option<String>,
    pub trang_thai: String,
}
