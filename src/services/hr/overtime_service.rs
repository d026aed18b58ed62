use crate::errors::{HrError, HrResult};
use crate::services::api_client::ApiClient;
use crate::services::hr::{acknowledge, list_of};
use crate::structs::hr::overtime_request::{OvertimePayload, OvertimeRequest, OvertimeStatusUpdate};

pub struct OvertimeService<'a> {
    api: &'a ApiClient,
}

impl<'a> OvertimeService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn mine(&self) -> HrResult<Vec<OvertimeRequest>> {
        list_of(self.api.get("/TangCa/get-my-ot").await?, "load overtime requests")
    }

    pub async fn all(&self) -> HrResult<Vec<OvertimeRequest>> {
        list_of(self.api.get("/TangCa/get-all-ot").await?, "load overtime requests")
    }

    pub async fn request(&self, payload: &OvertimePayload) -> HrResult<String> {
        if payload.so_gio_lam <= 0.0 {
            return Err(HrError::validation_error(
                "soGioLam",
                &payload.so_gio_lam.to_string(),
                "Overtime hours must be greater than zero",
            ));
        }

        let envelope = self.api.post("/TangCa/request-ot", Some(payload)).await?;
        acknowledge(envelope, "submit overtime request", "Overtime request submitted successfully!", "Error submitting overtime request")
    }

    pub async fn update_status(&self, id: i64, trang_thai: &str) -> HrResult<String> {
        let update = OvertimeStatusUpdate {
            id,
            trang_thai: trang_thai.to_string(),
        };
        let envelope = self.api.post("/TangCa/status-ot", Some(&update)).await?;
        acknowledge(envelope, "update overtime status", &format!("Overtime {}", trang_thai), "Failed to update overtime status")
    }
}

