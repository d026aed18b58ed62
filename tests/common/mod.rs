//! Shared fixtures for the integration suite.

use std::sync::{Arc, Mutex};
use hrdesk::enums::notice_level::NoticeLevel;
use hrdesk::services::api_client::ApiClient;
use hrdesk::services::response_interpreter::ResponseInterpreter;
use hrdesk::services::session_store::SessionStore;
use hrdesk::structs::config::api_config::ApiConfig;
use hrdesk::structs::raw_response::RawResponse;
use hrdesk::structs::session::{CurrentUser, Session};
use hrdesk::traits::navigator::Navigator;
use hrdesk::traits::notifier::Notifier;
use mockall::mock;
use tempfile::TempDir;
use wiremock::MockServer;

mock! {
    pub Notifier {}

    impl Notifier for Notifier {
        fn notify(&self, message: &str, level: NoticeLevel);
    }
}

mock! {
    pub Navigator {}

    impl Navigator for Navigator {
        fn invalidate_session(&self);
    }
}

/// Records every notice and redirect instead of printing them.
#[derive(Default)]
pub struct Recorder {
    notices: Mutex<Vec<(String, NoticeLevel)>>,
    redirects: Mutex<usize>,
}

impl Recorder {
    pub fn notices(&self) -> Vec<(String, NoticeLevel)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn redirects(&self) -> usize {
        *self.redirects.lock().unwrap()
    }
}

impl Notifier for Recorder {
    fn notify(&self, message: &str, level: NoticeLevel) {
        self.notices.lock().unwrap().push((message.to_string(), level));
    }
}

impl Navigator for Recorder {
    fn invalidate_session(&self) {
        *self.redirects.lock().unwrap() += 1;
    }
}

pub fn recording_interpreter() -> (ResponseInterpreter, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    (ResponseInterpreter::new(recorder.clone(), recorder.clone()), recorder)
}

pub fn json_response(status: u16, body: serde_json::Value) -> RawResponse {
    RawResponse::new(status, body.to_string()).with_content_type("application/json; charset=utf-8")
}

pub fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_secs: 5,
    }
}

pub fn client(server: &MockServer, interpreter: ResponseInterpreter, token: Option<&str>) -> ApiClient {
    ApiClient::new(&api_config(server), interpreter)
        .unwrap()
        .with_token(token.map(str::to_string))
}

pub fn session_store() -> (TempDir, SessionStore) {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::new(dir.path().join("session.toml"));
    (dir, store)
}

pub fn sample_session(token: &str) -> Session {
    Session::new(
        token.to_string(),
        CurrentUser {
            id: Some(12),
            username: "nv.an".to_string(),
            role: Some("Employee".to_string()),
            role_id: Some(2),
        },
    )
}
