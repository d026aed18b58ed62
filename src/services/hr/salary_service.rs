use std::path::Path;
use crate::errors::{HrError, HrResult};
use crate::services::api_client::ApiClient;
use crate::services::hr::{acknowledge, list_of};
use crate::structs::hr::salary_record::{ImportSummary, SalaryPeriod, SalaryRecord};

pub struct SalaryService<'a> {
    api: &'a ApiClient,
}

impl<'a> SalaryService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn mine(&self) -> HrResult<Vec<SalaryRecord>> {
        list_of(self.api.get("/BangLuong/my-salary").await?, "load salary")
    }

    pub async fn all(&self) -> HrResult<Vec<SalaryRecord>> {
        list_of(self.api.get("/BangLuong/get-all-salary").await?, "load salary")
    }

    pub async fn calculate(&self, period: &SalaryPeriod) -> HrResult<String> {
        if !(1..=12).contains(&period.thang) {
            return Err(HrError::validation_error("thang", &period.thang.to_string(), "Month must be between 1 and 12"));
        }

        let envelope = self.api.post("/BangLuong/calculate", Some(period)).await?;
        acknowledge(
            envelope,
            "calculate salary",
            &format!("Salary calculated for {}/{}", period.thang, period.nam),
            "Failed to calculate salary",
        )
    }

    pub async fn export_excel(&self, thang: Option<u32>, nam: Option<i32>) -> HrResult<Vec<u8>> {
        self.api
            .download("/BangLuong/export-excel", &period_query(thang, nam), "Không thể xuất Excel")
            .await
    }

    pub async fn export_pdf(&self, thang: Option<u32>, nam: Option<i32>) -> HrResult<Vec<u8>> {
        self.api
            .download("/BangLuong/export-pdf", &period_query(thang, nam), "Không thể xuất PDF")
            .await
    }

    pub async fn import_excel(&self, path: &Path) -> HrResult<ImportSummary> {
        let content = tokio::fs::read(path)
            .await
            .map_err(|e| HrError::file_error(&path.display().to_string(), "read", &e.to_string()))?;
        let file_name = path
            .file_name()
            .map_or_else(|| "import.xlsx".to_string(), |name| name.to_string_lossy().into_owned());

        let envelope = self
            .api
            .upload("/BangLuong/import-excel", &file_name, content, "Không thể import Excel")
            .await?;

        if !envelope.is_success() {
            let message = envelope.message().unwrap_or("Import Excel thất bại");
            return Err(HrError::request_failed("import Excel", message));
        }

        Ok(envelope.data_as()?.unwrap_or_default())
    }
}

// Zero and absent filters are both left out of the query string.
fn period_query(thang: Option<u32>, nam: Option<i32>) -> [(&'static str, Option<String>); 2] {
    [
        ("thang", thang.filter(|m| *m != 0).map(|m| m.to_string())),
        ("nam", nam.filter(|y| *y != 0).map(|y| y.to_string())),
    ]
}
