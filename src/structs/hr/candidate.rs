use serde::{Deserialize, Serialize};
use crate::enums::candidate_stage::CandidateStage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub ho_ten: Option<String>,
    pub email: Option<String>,
    pub so_dien_thoai: Option<String>,
    pub vi_tri_ung_tuyen: Option<String>,
    pub ngay_nop_ho_so: Option<String>,
    pub trang_thai_hien_tai: Option<i64>,
    pub id_danh_gia: Option<i64>,
}

impl Candidate {
    pub fn stage(&self) -> CandidateStage {
        CandidateStage::for_candidate(self.trang_thai_hien_tai)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CandidateStageUpdate {
    pub id: i64,
    pub trang_thai_hien_tai: i64,
}

/// Interview evaluation as read from the evaluation history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub id: Option<i64>,
    pub id_ung_vien: Option<i64>,
    pub vong_phong_van: Option<String>,
    pub nhan_xet_chuyen_mon: Option<String>,
    pub diem_so: Option<f64>,
    pub ket_qua: Option<bool>,
    pub ngay_danh_gia: Option<String>,
    pub ma_nguoi_danh_gia: Option<i64>,
}

/// Evaluation write payload. `id == 0` creates a new evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EvaluationPayload {
    pub id: i64,
    pub id_ung_vien: i64,
    pub vong_phong_van: Option<String>,
    pub nhan_xet_chuyen_mon: Option<String>,
    pub diem_so: Option<f64>,
    pub ket_qua: Option<bool>,
    pub ngay_danh_gia: Option<String>,
    pub ma_nguoi_danh_gia: Option<i64>,
}
