use serde::Deserialize;

/// Flat login answer; the token and account details sit at the top level of the body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: Option<String>,
    pub id_tai_khoan: Option<i64>,
    pub role: Option<String>,
    pub role_id: Option<i64>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub ten_dang_nhap: String,
    pub mat_khau: String,
}
