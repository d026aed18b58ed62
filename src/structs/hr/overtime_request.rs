use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeRequest {
    pub id: Option<i64>,
    pub ho_ten: Option<String>,
    pub ngay_tang_ca: Option<String>,
    pub gio_bat_dau: Option<String>,
    pub gio_ket_thuc: Option<String>,
    pub so_gio_lam: Option<f64>,
    pub he_so: Option<f64>,
    pub ly_do_tang_ca: Option<String>,
    pub trang_thai: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimePayload {
    pub gio_bat_dau: String,
    pub gio_ket_thuc: String,
    pub so_gio_lam: f64,
    pub he_so: f64,
    pub ly_do_tang_ca: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeStatusUpdate {
    pub id: i64,
    pub trang_thai: String,
}
