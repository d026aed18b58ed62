use crate::enums::task_status::TaskStatus;
use crate::errors::{HrError, HrResult};
use crate::services::api_client::ApiClient;
use crate::services::hr::{acknowledge, list_of};
use crate::structs::hr::task::{Task, TaskAssignment, TaskStatusUpdate};

pub struct TaskService<'a> {
    api: &'a ApiClient,
}

impl<'a> TaskService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn mine(&self) -> HrResult<Vec<Task>> {
        list_of(self.api.get("/CongViec/get-my-tasks").await?, "load tasks")
    }

    pub async fn all(&self) -> HrResult<Vec<Task>> {
        list_of(self.api.get("/CongViec/get-all-tasks").await?, "load tasks")
    }

    pub async fn assign(&self, assignment: &TaskAssignment) -> HrResult<String> {
        if assignment.tieu_de.trim().is_empty() {
            return Err(HrError::validation_error("TieuDe", "", "Task title is required"));
        }

        let envelope = self.api.post("/CongViec/assign-task", Some(assignment)).await?;
        acknowledge(envelope, "assign task", "Giao việc thành công!", "Giao việc thất bại")
    }

    pub async fn update_status(&self, id: i64, status: TaskStatus, note: &str) -> HrResult<String> {
        let update = TaskStatusUpdate {
            id,
            trang_thai: status.label().to_string(),
            ghi_chu: note.to_string(),
        };

        let envelope = self.api.post("/CongViec/update-status", Some(&update)).await?;
        acknowledge(envelope, "update task status", "Cập nhật trạng thái thành công", "Không thể cập nhật trạng thái")
    }
}
