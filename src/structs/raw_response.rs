use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;

/// A transport response read off the wire, before any envelope interpretation.
///
/// The body is kept as bytes; [`RawResponse::json`] parses it on demand and fails on empty
/// or non-JSON bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self {
            status,
            status_text,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    pub async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            content_type,
            body,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.contains("application/json"))
    }

    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_does_not_parse() {
        let response = RawResponse::new(200, Vec::new());
        assert!(response.json().is_err());
        assert!(response.is_success());
    }

    #[test]
    fn status_text_comes_from_the_status_code() {
        assert_eq!(RawResponse::new(502, "").status_text, "Bad Gateway");
        assert_eq!(RawResponse::new(599, "").status_text, "");
    }

    #[test]
    fn content_type_detection() {
        let response = RawResponse::new(200, "{}").with_content_type("application/json; charset=utf-8");
        assert!(response.is_json());
        assert!(!RawResponse::new(200, "ok").is_json());
    }
}
