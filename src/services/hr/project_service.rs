use serde_json::json;
use crate::errors::{HrError, HrResult};
use crate::services::api_client::ApiClient;
use crate::services::hr::{acknowledge, data_of, list_of};
use crate::structs::hr::project::{Project, ProjectPayload};

pub struct ProjectService<'a> {
    api: &'a ApiClient,
}

impl<'a> ProjectService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> HrResult<Vec<Project>> {
        list_of(self.api.get("/DuAn/get-list").await?, "load projects")
    }

    pub async fn by_id(&self, id: i64) -> HrResult<Option<Project>> {
        data_of(self.api.get(&format!("/DuAn/{}", id)).await?, "load project")
    }

    pub async fn create(&self, payload: &ProjectPayload) -> HrResult<String> {
        validate(payload)?;
        let envelope = self.api.post("/DuAn/add", Some(payload)).await?;
        acknowledge(envelope, "add project", "Project created", "Failed to create project")
    }

    pub async fn update(&self, payload: &ProjectPayload) -> HrResult<String> {
        if payload.id.is_none() {
            return Err(HrError::validation_error("Id", "", "An existing project id is required"));
        }
        validate(payload)?;
        let envelope = self.api.post("/DuAn/update", Some(payload)).await?;
        acknowledge(envelope, "update project", "Project updated", "Failed to update project")
    }

    pub async fn delete(&self, id: i64) -> HrResult<String> {
        let envelope = self.api.post("/DuAn/delete", Some(&json!({ "Id": id }))).await?;
        acknowledge(envelope, "delete project", "Project deleted", "Failed to delete project")
    }
}

fn validate(payload: &ProjectPayload) -> HrResult<()> {
    if payload.ten_du_an.trim().is_empty() {
        return Err(HrError::validation_error("TenDuAn", "", "Project name is required"));
    }
    Ok(())
}
