use serde_json::Value;
use crate::errors::{HrError, HrResult};
use crate::helpers::display::parse_date;
use crate::services::api_client::ApiClient;
use crate::services::hr::{acknowledge, data_of, list_of};
use crate::structs::hr::leave_request::{LeavePayload, LeaveRequest, LeaveReview};

pub struct LeaveService<'a> {
    api: &'a ApiClient,
}

impl<'a> LeaveService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_all(&self) -> HrResult<Vec<LeaveRequest>> {
        list_of(self.api.get("/NghiPhep/get-list").await?, "load leave requests")
    }

    pub async fn mine(&self) -> HrResult<Vec<LeaveRequest>> {
        list_of(self.api.get("/NghiPhep/get-request-employee").await?, "load leave requests")
    }

    pub async fn by_id(&self, id: i64) -> HrResult<Option<LeaveRequest>> {
        data_of(self.api.get(&format!("/NghiPhep/get-by-id?id={}", id)).await?, "load leave request")
    }

    pub async fn create(&self, payload: &LeavePayload) -> HrResult<String> {
        validate(payload)?;
        let envelope = self.api.post("/NghiPhep/create-request", Some(payload)).await?;
        acknowledge(envelope, "submit leave request", "Leave request submitted successfully!", "Failed to submit leave request")
    }

    pub async fn update(&self, payload: &LeavePayload) -> HrResult<String> {
        if payload.id.is_none() {
            return Err(HrError::validation_error("id", "", "An existing request id is required"));
        }
        validate(payload)?;
        let envelope = self.api.post("/NghiPhep/update-request", Some(payload)).await?;
        acknowledge(envelope, "update leave request", "Request updated", "Failed to update leave request")
    }

    pub async fn delete(&self, id: i64) -> HrResult<String> {
        let envelope = self
            .api
            .post::<Value>(&format!("/NghiPhep/delete-request?id={}", id), None)
            .await?;
        acknowledge(envelope, "delete leave request", "Request deleted", "Failed to delete leave request")
    }

    pub async fn approve_reject(&self, review: &LeaveReview) -> HrResult<String> {
        let envelope = self.api.post("/NghiPhep/approve-reject", Some(review)).await?;
        let outcome = if review.is_approved { "Request approved" } else { "Request rejected" };
        acknowledge(envelope, "review leave request", outcome, "Failed to review leave request")
    }
}

fn validate(payload: &LeavePayload) -> HrResult<()> {
    if payload.ly_do.trim().is_empty() {
        return Err(HrError::validation_error("lyDo", "", "Please fill all fields"));
    }

    let start = parse_date("ngayBatDau", &payload.ngay_bat_dau)?;
    let end = parse_date("ngayKetThuc", &payload.ngay_ket_thuc)?;
    if end < start {
        return Err(HrError::validation_error(
            "ngayKetThuc",
            &payload.ngay_ket_thuc,
            "End date must not be before start date",
        ));
    }

    Ok(())
}
