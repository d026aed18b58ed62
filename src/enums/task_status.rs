use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Status values a task can be moved through. The backend stores the Vietnamese label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Mới giao")]
    Assigned,
    #[serde(rename = "Đang thực hiện")]
    InProgress,
    #[serde(rename = "Hoàn thành")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Assigned, Self::InProgress, Self::Done];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Assigned => "Mới giao",
            Self::InProgress => "Đang thực hiện",
            Self::Done => "Hoàn thành",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label() == trimmed)
            .ok_or_else(|| "Vui lòng chọn trạng thái hợp lệ".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_labels() {
        assert_eq!("Đang thực hiện".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!(" Hoàn thành ".parse::<TaskStatus>(), Ok(TaskStatus::Done));
        assert!("done".parse::<TaskStatus>().is_err());
    }
}
