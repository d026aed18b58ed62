use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use crate::config::constants::timeout_duration;
use crate::errors::{HrError, HrResult};
use crate::services::response_interpreter::ResponseInterpreter;
use crate::structs::config::api_config::ApiConfig;
use crate::structs::envelope::Envelope;
use crate::structs::raw_response::RawResponse;

const ENDPOINT_MISSING: &str = "Endpoint không tồn tại. Vui lòng kiểm tra lại backend đã được restart chưa.";

/// HTTP transport for the HR backend. Every JSON call is routed through the
/// [`ResponseInterpreter`]; downloads and uploads have their own, narrower handling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    interpreter: ResponseInterpreter,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, interpreter: ResponseInterpreter) -> HrResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
            interpreter,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn headers(&self, json: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if json {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(token) = &self.token {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => log::warn!("⚠️ Stored token is not a valid header value, sending request without it"),
            }
        }
        headers
    }

    pub async fn get(&self, endpoint: &str) -> HrResult<Option<Envelope>> {
        let request = self.client.get(self.url(endpoint)).headers(self.headers(true));
        self.dispatch(request, "GET", endpoint).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: Option<&B>) -> HrResult<Option<Envelope>> {
        let mut request = self.client.post(self.url(endpoint)).headers(self.headers(true));
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }
        self.dispatch(request, "POST", endpoint).await
    }

    async fn dispatch(&self, request: RequestBuilder, method: &str, endpoint: &str) -> HrResult<Option<Envelope>> {
        log::debug!("➡️ {} {}", method, endpoint);

        let response = request.send().await.map_err(|e| {
            log::error!("API {} Error: {}", method, e);
            network_error(method, endpoint, e)
        })?;
        let raw = RawResponse::read(response)
            .await
            .map_err(|e| network_error(method, endpoint, e))?;

        log::debug!("⬅️ {} {} -> HTTP {}", method, endpoint, raw.status);
        self.interpreter
            .interpret(&raw)
            .map_err(|e| HrError::api(endpoint, e))
    }

    /// Fetch a binary export. Empty query values are left out of the URL.
    pub async fn download(&self, endpoint: &str, query: &[(&str, Option<String>)], failure_message: &str) -> HrResult<Vec<u8>> {
        let params: Vec<(&str, String)> = query
            .iter()
            .filter_map(|(key, value)| value.as_ref().filter(|v| !v.is_empty()).map(|v| (*key, v.clone())))
            .collect();

        let response = self
            .client
            .get(self.url(endpoint))
            .headers(self.headers(false))
            .query(&params)
            .send()
            .await
            .map_err(|e| network_error("GET", endpoint, e))?;

        if !response.status().is_success() {
            log::debug!("Download {} failed with HTTP {}", endpoint, response.status());
            return Err(HrError::request_failed(endpoint, failure_message));
        }

        let bytes = response.bytes().await.map_err(|e| network_error("GET", endpoint, e))?;
        Ok(bytes.to_vec())
    }

    /// Multipart upload of a single `file` field. The backend must answer with JSON.
    pub async fn upload(&self, endpoint: &str, file_name: &str, content: Vec<u8>, failure_message: &str) -> HrResult<Envelope> {
        let form = Form::new().part("file", Part::bytes(content).file_name(file_name.to_string()));

        let response = self
            .client
            .post(self.url(endpoint))
            .headers(self.headers(false))
            .multipart(form)
            .send()
            .await
            .map_err(|e| network_error("POST", endpoint, e))?;
        let raw = RawResponse::read(response)
            .await
            .map_err(|e| network_error("POST", endpoint, e))?;

        if !raw.is_json() {
            return Err(HrError::request_failed(endpoint, &format!("Unexpected response: {}", raw.text())));
        }
        let envelope = Envelope::new(raw.json()?);

        if raw.status == 404 {
            return Err(HrError::request_failed(endpoint, ENDPOINT_MISSING));
        }

        if !raw.is_success() {
            let message = envelope
                .message()
                .map_or_else(|| format!("HTTP {}: {}", raw.status, failure_message), str::to_string);
            return Err(HrError::request_failed(endpoint, &message));
        }

        Ok(envelope)
    }
}

fn network_error(method: &str, endpoint: &str, error: reqwest::Error) -> HrError {
    HrError::NetworkError {
        operation: format!("{} {}", method, endpoint),
        url: error.url().map(|u| u.to_string()),
        status_code: error.status().map(|s| s.as_u16()),
        reason: error.to_string(),
    }
}
