use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Option<i64>,
    pub gio_vao: Option<String>,
    pub gio_ra: Option<String>,
    pub vi_tri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPayload {
    pub vi_tri: Option<String>,
}
