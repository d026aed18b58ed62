use serde::Serialize;
use crate::errors::HrResult;
use crate::services::api_client::ApiClient;
use crate::services::hr::{acknowledge, data_of, list_of};
use crate::structs::hr::candidate::{Candidate, Evaluation, EvaluationPayload};

pub struct CandidateService<'a> {
    api: &'a ApiClient,
}

impl<'a> CandidateService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Candidates still in the pipeline.
    pub async fn list(&self) -> HrResult<Vec<Candidate>> {
        list_of(self.api.get("/UngVien/get-list").await?, "load candidates")
    }

    pub async fn all(&self) -> HrResult<Vec<Candidate>> {
        list_of(self.api.get("/UngVien/get-all").await?, "load candidates")
    }

    pub async fn update<B: Serialize + ?Sized>(&self, candidate: &B) -> HrResult<String> {
        let envelope = self.api.post("/UngVien/update-ung-vien", Some(candidate)).await?;
        acknowledge(envelope, "update candidate", "Cập nhật trạng thái ứng viên thành công", "Cập nhật thất bại")
    }

    pub async fn evaluation(&self, id_danh_gia: i64) -> HrResult<Option<Evaluation>> {
        data_of(
            self.api.get(&format!("/UngVien/get-lich-su-danh-gia/{}", id_danh_gia)).await?,
            "load evaluation",
        )
    }

    /// Id 0 creates a new evaluation, anything else updates it.
    pub async fn save_evaluation(&self, payload: &EvaluationPayload) -> HrResult<String> {
        let envelope = self.api.post("/UngVien/update-lich-su-danh-gia", Some(payload)).await?;
        let success = if payload.id == 0 {
            "Thêm đánh giá thành công"
        } else {
            "Cập nhật đánh giá thành công"
        };
        acknowledge(envelope, "save evaluation", success, "Lưu thất bại")
    }
}
