use serde_json::{json, Value};
use crate::errors::HrResult;
use crate::services::api_client::ApiClient;
use crate::services::hr::{acknowledge, data_of, list_of};
use crate::structs::hr::employee::Employee;

pub struct StaffService<'a> {
    api: &'a ApiClient,
}

impl<'a> StaffService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> HrResult<Vec<Employee>> {
        list_of(self.api.get("/NhanVien/get-list").await?, "load staff")
    }

    pub async fn by_id(&self, id: i64) -> HrResult<Option<Employee>> {
        data_of(self.api.get(&format!("/NhanVien/{}", id)).await?, "load employee")
    }

    pub async fn create(&self, employee: &Value) -> HrResult<String> {
        let envelope = self.api.post("/NhanVien/add", Some(employee)).await?;
        acknowledge(envelope, "add employee", "Employee added", "Failed to add employee")
    }

    /// Posts the full employee record; the backend replaces every field.
    pub async fn update<B: serde::Serialize + ?Sized>(&self, employee: &B) -> HrResult<String> {
        let envelope = self.api.post("/NhanVien/update", Some(employee)).await?;
        acknowledge(envelope, "update employee", "Employee updated", "Failed to update employee")
    }

    pub async fn delete(&self, id: i64) -> HrResult<String> {
        let envelope = self.api.post("/NhanVien/delete", Some(&json!({ "id": id }))).await?;
        acknowledge(envelope, "delete employee", "Employee deleted", "Failed to delete employee")
    }

    pub async fn add_ot(&self, overtime: &Value) -> HrResult<String> {
        let envelope = self.api.post("/NhanVien/add-ot", Some(overtime)).await?;
        acknowledge(envelope, "add overtime", "Overtime added", "Failed to add overtime")
    }
}
