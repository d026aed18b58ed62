use serde_json::Value;
use crate::errors::HrResult;
use crate::services::api_client::ApiClient;
use crate::services::hr::{acknowledge, data_of, list_of};
use crate::structs::hr::department::Department;

pub struct DepartmentService<'a> {
    api: &'a ApiClient,
}

impl<'a> DepartmentService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> HrResult<Vec<Department>> {
        list_of(self.api.get("/PhongBan/get-list").await?, "load departments")
    }

    pub async fn by_id(&self, id: i64) -> HrResult<Option<Department>> {
        data_of(self.api.get(&format!("/PhongBan/get-by-id?id={}", id)).await?, "load department")
    }

    pub async fn create(&self, department: &Value) -> HrResult<String> {
        let envelope = self.api.post("/PhongBan/add", Some(department)).await?;
        acknowledge(envelope, "add department", "Department added", "Failed to add department")
    }

    pub async fn update(&self, department: &Value) -> HrResult<String> {
        let envelope = self.api.post("/PhongBan/update", Some(department)).await?;
        acknowledge(envelope, "update department", "Department updated", "Failed to update department")
    }

    pub async fn delete(&self, id: i64) -> HrResult<String> {
        let envelope = self
            .api
            .post::<Value>(&format!("/PhongBan/delete?id={}", id), None)
            .await?;
        acknowledge(envelope, "delete department", "Department deleted", "Failed to delete department")
    }
}
