use crate::enums::dashboard_view::DashboardView;
use crate::errors::HrResult;
use crate::services::api_client::ApiClient;
use crate::services::hr::attendance_service::AttendanceService;
use crate::structs::envelope::Envelope;
use crate::structs::hr::dashboard_stats::{DashboardStats, DashboardSummary};
use crate::structs::session::CurrentUser;

pub struct DashboardService<'a> {
    api: &'a ApiClient,
}

impl<'a> DashboardService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> HrResult<Option<DashboardStats>> {
        let envelope = self.api.get("/ThongKe/dashboard").await?;
        match envelope.filter(Envelope::is_success) {
            Some(envelope) => Ok(envelope.data_as()?),
            None => Ok(None),
        }
    }

    /// Staff count and statistics, fetched concurrently. A transport or interpreter
    /// failure on either call fails the whole summary; an unsuccessful envelope only
    /// zeroes its part.
    pub async fn summary(&self) -> HrResult<DashboardSummary> {
        let (staff, stats) = futures::try_join!(self.api.get("/NhanVien/get-list"), self.stats())?;

        let total_staff = staff
            .filter(Envelope::is_success)
            .and_then(|envelope| envelope.data().and_then(|data| data.as_array().map(Vec::len)))
            .unwrap_or(0);

        Ok(DashboardSummary { total_staff, stats })
    }

    /// Admins get the staff and statistics summary; everyone else gets today's attendance.
    pub async fn load(&self, user: &CurrentUser) -> HrResult<DashboardView> {
        if user.is_admin() {
            log::debug!("Loading admin dashboard for {}", user.username);
            return Ok(DashboardView::Admin(self.summary().await?));
        }

        let today = AttendanceService::new(self.api).today().await?;
        Ok(DashboardView::Employee(today))
    }
}
