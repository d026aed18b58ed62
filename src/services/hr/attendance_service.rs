use crate::errors::HrResult;
use crate::services::api_client::ApiClient;
use crate::services::hr::acknowledge;
use crate::structs::envelope::Envelope;
use crate::structs::hr::attendance_record::{AttendanceRecord, CheckPayload};

pub struct AttendanceService<'a> {
    api: &'a ApiClient,
}

impl<'a> AttendanceService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Today's attendance, `None` when the employee has not checked in yet.
    pub async fn today(&self) -> HrResult<Option<AttendanceRecord>> {
        let envelope = self.api.get("/ChamCong/MyToday").await?;
        match envelope.filter(Envelope::is_success) {
            Some(envelope) => Ok(envelope.data_as()?),
            None => Ok(None),
        }
    }

    pub async fn check_in(&self, vi_tri: Option<String>) -> HrResult<String> {
        let envelope = self.api.post("/ChamCong/CheckIn", Some(&CheckPayload { vi_tri })).await?;
        acknowledge(envelope, "check in", "Check-in thành công", "Check-in thất bại")
    }

    pub async fn check_out(&self, vi_tri: Option<String>) -> HrResult<String> {
        let envelope = self.api.post("/ChamCong/CheckOut", Some(&CheckPayload { vi_tri })).await?;
        acknowledge(envelope, "check out", "Check-out thành công", "Check-out thất bại")
    }
}
