use crate::config::constants::MIN_PASSWORD_LENGTH;
use crate::errors::{HrError, HrResult};
use crate::services::api_client::ApiClient;
use crate::services::session_store::SessionStore;
use crate::structs::hr::login_response::{LoginRequest, LoginResponse};
use crate::structs::session::{CurrentUser, Session};

const LOGIN_FAILED: &str = "Đăng nhập thất bại";

pub struct AuthService<'a> {
    api: &'a ApiClient,
    store: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    pub fn new(api: &'a ApiClient, store: &'a SessionStore) -> Self {
        Self { api, store }
    }

    /// Log in and persist the session. The backend answers with a flat body, not a
    /// `data` payload.
    pub async fn login(&self, username: &str, password: &str) -> HrResult<Session> {
        let request = LoginRequest {
            ten_dang_nhap: username.to_string(),
            mat_khau: password.to_string(),
        };

        let envelope = self
            .api
            .post("/Auth/login", Some(&request))
            .await?
            .ok_or_else(|| HrError::request_failed("login", LOGIN_FAILED))?;
        let response: LoginResponse = envelope.body_as()?;

        let Some(token) = response.token.filter(|t| !t.is_empty()) else {
            let message = response.message.unwrap_or_else(|| LOGIN_FAILED.to_string());
            return Err(HrError::request_failed("login", &message));
        };

        let session = Session::new(
            token,
            CurrentUser {
                id: response.id_tai_khoan,
                username: username.to_string(),
                role: response.role,
                role_id: response.role_id,
            },
        );
        self.store.save(&session)?;
        log::info!("✅ Logged in as {}", username);
        Ok(session)
    }

    pub fn logout(&self) -> HrResult<()> {
        self.store.clear()
    }

    pub fn current_user(&self) -> HrResult<Option<CurrentUser>> {
        Ok(self.store.load()?.map(|session| session.user))
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }
}

/// Client-side password change check. The backend has no endpoint for it yet, so a
/// passing check is reported as success without a call.
pub fn validate_password_change(new_password: &str, confirmation: &str) -> HrResult<()> {
    if new_password != confirmation {
        return Err(HrError::validation_error("password", "***", "Passwords do not match!"));
    }

    if new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(HrError::validation_error(
            "password",
            "***",
            &format!("Password must be at least {} characters.", MIN_PASSWORD_LENGTH),
        ));
    }

    Ok(())
}
