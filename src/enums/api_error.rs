use thiserror::Error;
use crate::enums::notice_level::NoticeLevel;

/// Failure signaled by the response interpreter.
///
/// Callers normally only need the message; the variant decides how the notice was styled
/// and whether the session was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend reported that the caller has no valid session. The session has already
    /// been invalidated when this is returned.
    #[error("Unauthorized")]
    SessionExpired,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Failed(String),
}

impl ApiError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Notice level used when the failure was surfaced. `None` for a session redirect,
    /// which is not announced with a notice.
    pub fn notice_level(&self) -> Option<NoticeLevel> {
        match self {
            Self::SessionExpired => None,
            Self::Forbidden(_) => Some(NoticeLevel::Warning),
            Self::Failed(_) => Some(NoticeLevel::Danger),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expired_reads_as_unauthorized() {
        assert_eq!(ApiError::SessionExpired.message(), "Unauthorized");
        assert!(ApiError::SessionExpired.notice_level().is_none());
    }

    #[test]
    fn forbidden_and_failed_carry_their_message() {
        let forbidden = ApiError::Forbidden("Bạn không có quyền".to_string());
        assert_eq!(forbidden.message(), "Bạn không có quyền");
        assert_eq!(forbidden.notice_level(), Some(NoticeLevel::Warning));

        let failed = ApiError::Failed("Error 500".to_string());
        assert_eq!(failed.to_string(), "Error 500");
        assert_eq!(failed.notice_level(), Some(NoticeLevel::Danger));
    }
}
