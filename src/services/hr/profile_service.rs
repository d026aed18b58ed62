use crate::errors::{HrError, HrResult};
use crate::services::api_client::ApiClient;
use crate::services::hr::staff_service::StaffService;
use crate::structs::hr::employee::{Employee, ProfileUpdate};
use crate::structs::session::Session;

/// Employee self-service over the staff endpoints, keyed by the logged-in account.
pub struct ProfileService<'a> {
    staff: StaffService<'a>,
}

impl<'a> ProfileService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self {
            staff: StaffService::new(api),
        }
    }

    pub async fn show(&self, session: &Session) -> HrResult<Employee> {
        let id = employee_id(session)?;
        self.staff
            .by_id(id)
            .await?
            .ok_or_else(|| HrError::request_failed("load profile", "Failed to load profile: Unknown error"))
    }

    /// Fetch the current record, overlay the editable fields and post it back whole.
    pub async fn update(&self, session: &Session, update: ProfileUpdate) -> HrResult<String> {
        if update.is_empty() {
            return Err(HrError::validation_error("profile", "", "Nothing to update"));
        }

        let current = self.show(session).await?;
        let merged = current.apply_profile(update);
        self.staff.update(&merged).await
    }
}

fn employee_id(session: &Session) -> HrResult<i64> {
    session.user.id.ok_or_else(|| {
        HrError::validation_error("session", &session.user.username, "Session has no employee id, log in again")
    })
}
