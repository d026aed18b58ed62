use std::sync::Arc;
use crate::enums::api_error::ApiError;
use crate::enums::notice_level::NoticeLevel;
use crate::structs::envelope::{Envelope, SUCCESS_STATUS_CODE};
use crate::structs::raw_response::RawResponse;
use crate::traits::navigator::Navigator;
use crate::traits::notifier::Notifier;

/// Backend message marking a missing login, as opposed to a permission problem.
pub const NOT_LOGGED_IN_MARKER: &str = "Chưa đăng nhập";

const UNAUTHORIZED: &str = "Unauthorized";
const FORBIDDEN: &str = "Forbidden";
const UNKNOWN_ERROR: &str = "Unknown Error";
const SOMETHING_WENT_WRONG: &str = "Something went wrong";

/// Single gateway between raw transport responses and domain data.
///
/// Reconciles the HTTP status with the business `statusCode` carried in the JSON body.
/// Non-redirect failures raise exactly one notice; session loss goes through the
/// navigator instead. The interpreter holds no mutable state.
#[derive(Clone)]
pub struct ResponseInterpreter {
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ResponseInterpreter {
    pub fn new(notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
        Self { notifier, navigator }
    }

    /// Returns the parsed envelope unchanged on success, `None` for a successful response
    /// whose body is not JSON, and an [`ApiError`] for everything else.
    pub fn interpret(&self, response: &RawResponse) -> Result<Option<Envelope>, ApiError> {
        let envelope = match response.json() {
            Ok(body) => Envelope::new(body),
            Err(e) => {
                log::debug!("Response body is not JSON (HTTP {}): {}", response.status, e);
                return self.interpret_unparsed(response);
            }
        };

        if response.is_unauthorized() {
            return Err(self.unauthorized(&envelope));
        }

        if let Some(code) = envelope.status_code().filter(|code| *code != SUCCESS_STATUS_CODE) {
            log::debug!("Business status {} inside HTTP {}", code, response.status);
            return Err(match code {
                401 => self.unauthorized(&envelope),
                403 => self.forbidden(envelope.message().unwrap_or(FORBIDDEN)),
                _ => {
                    let message = envelope
                        .message()
                        .map_or_else(|| format!("Error {}", code), str::to_string);
                    self.failed(&message)
                }
            });
        }

        if !response.is_success() {
            return Err(self.failed(envelope.message().unwrap_or(SOMETHING_WENT_WRONG)));
        }

        Ok(Some(envelope))
    }

    fn interpret_unparsed(&self, response: &RawResponse) -> Result<Option<Envelope>, ApiError> {
        if response.is_unauthorized() {
            return Err(self.expire_session());
        }

        if !response.is_success() {
            let message = if response.status_text.is_empty() {
                UNKNOWN_ERROR
            } else {
                response.status_text.as_str()
            };
            return Err(self.failed(message));
        }

        Ok(None)
    }

    fn unauthorized(&self, envelope: &Envelope) -> ApiError {
        match envelope.message() {
            Some(message) if message.contains(NOT_LOGGED_IN_MARKER) => self.expire_session(),
            message => self.forbidden(message.unwrap_or(UNAUTHORIZED)),
        }
    }

    fn expire_session(&self) -> ApiError {
        log::warn!("🔒 Session rejected by the backend, redirecting to login");
        self.navigator.invalidate_session();
        ApiError::SessionExpired
    }

    fn forbidden(&self, message: &str) -> ApiError {
        self.notifier.notify(message, NoticeLevel::Warning);
        ApiError::Forbidden(message.to_string())
    }

    fn failed(&self, message: &str) -> ApiError {
        self.notifier.notify(message, NoticeLevel::Danger);
        ApiError::Failed(message.to_string())
    }
}
