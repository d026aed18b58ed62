use serde::{Deserialize, Serialize};

/// Column of the candidate pipeline, keyed by the backend's `trangThaiHienTai` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CandidateStage {
    New,
    Interview,
    Offer,
}

impl CandidateStage {
    pub const ALL: [CandidateStage; 3] = [Self::New, Self::Interview, Self::Offer];

    pub fn code(&self) -> i64 {
        match self {
            Self::New => 0,
            Self::Interview => 1,
            Self::Offer => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::New => "Mới",
            Self::Interview => "Phỏng vấn",
            Self::Offer => "Offer",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.code() == code)
    }

    /// Stage a candidate is shown in. Missing or unknown codes fall back to `New`.
    pub fn for_candidate(code: Option<i64>) -> Self {
        code.and_then(Self::from_code).unwrap_or(Self::New)
    }
}
