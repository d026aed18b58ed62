//! One service per backend area. Each is a thin, typed wrapper over [`ApiClient`]; the
//! envelope checks every page of the web client repeated live in the helpers below.
//!
//! [`ApiClient`]: crate::services::api_client::ApiClient

use serde::de::DeserializeOwned;
use crate::errors::{HrError, HrResult};
use crate::structs::envelope::Envelope;

pub mod attendance_service;
pub mod auth_service;
pub mod candidate_service;
pub mod dashboard_service;
pub mod department_service;
pub mod leave_service;
pub mod overtime_service;
pub mod profile_service;
pub mod project_service;
pub mod salary_service;
pub mod staff_service;
pub mod task_service;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Accept only an envelope carrying business status 200.
pub(crate) fn expect_success(envelope: Option<Envelope>, operation: &str) -> HrResult<Envelope> {
    match envelope {
        Some(envelope) if envelope.is_success() => Ok(envelope),
        other => {
            let reason = other
                .as_ref()
                .and_then(Envelope::message)
                .unwrap_or(UNKNOWN_ERROR);
            Err(HrError::request_failed(operation, &format!("Failed to {}: {}", operation, reason)))
        }
    }
}

pub(crate) fn data_of<T: DeserializeOwned>(envelope: Option<Envelope>, operation: &str) -> HrResult<Option<T>> {
    Ok(expect_success(envelope, operation)?.data_as()?)
}

pub(crate) fn list_of<T: DeserializeOwned>(envelope: Option<Envelope>, operation: &str) -> HrResult<Vec<T>> {
    Ok(data_of::<Vec<T>>(envelope, operation)?.unwrap_or_default())
}

/// Outcome message of a write call: the backend message (or `success`) when accepted,
/// otherwise a failure carrying the backend message (or `failure`).
pub(crate) fn acknowledge(envelope: Option<Envelope>, operation: &str, success: &str, failure: &str) -> HrResult<String> {
    match envelope {
        Some(envelope) if envelope.is_success() => {
            Ok(envelope.message().unwrap_or(success).to_string())
        }
        other => {
            let message = other.as_ref().and_then(Envelope::message).unwrap_or(failure);
            Err(HrError::request_failed(operation, message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_without_business_status_is_not_a_success() {
        let envelope = Envelope::new(json!({"data": []}));
        let error = expect_success(Some(envelope), "load tasks").unwrap_err();
        assert_eq!(error.to_string(), "Failed to load tasks: Unknown error");
    }

    #[test]
    fn missing_list_data_is_empty() {
        let envelope = Envelope::new(json!({"statusCode": 200, "data": null}));
        let items: Vec<serde_json::Value> = list_of(Some(envelope), "load").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn acknowledge_prefers_backend_message() {
        let ok = Envelope::new(json!({"statusCode": 200, "message": "Check-in lúc 08:01"}));
        assert_eq!(acknowledge(Some(ok), "check in", "Check-in thành công", "Check-in thất bại").unwrap(), "Check-in lúc 08:01");

        let silent = Envelope::new(json!({"statusCode": 200}));
        assert_eq!(acknowledge(Some(silent), "check in", "Check-in thành công", "Check-in thất bại").unwrap(), "Check-in thành công");

        let error = acknowledge(None, "check in", "Check-in thành công", "Check-in thất bại").unwrap_err();
        assert_eq!(error.to_string(), "Check-in thất bại");
    }
}
