use hrdesk::enums::api_error::ApiError;
use hrdesk::enums::notice_level::NoticeLevel;
use hrdesk::errors::HrError;
use hrdesk::services::api_client::ApiClient;
use hrdesk::structs::config::api_config::ApiConfig;
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use crate::common::{client, recording_interpreter};

#[tokio::test]
async fn json_calls_carry_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ChamCong/MyToday"))
        .and(header("Authorization", "Bearer abc123"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 200, "data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let (interpreter, _) = recording_interpreter();
    let api = client(&server, interpreter, Some("abc123"));

    let envelope = api.get("/ChamCong/MyToday").await.unwrap().unwrap();
    assert!(envelope.is_success());
    assert!(envelope.data().is_none());
}

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/TangCa/status-ot"))
        .and(body_json(json!({"id": 5, "trangThai": "Đã duyệt"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 200, "message": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    let (interpreter, _) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));

    let envelope = api
        .post("/TangCa/status-ot", Some(&json!({"id": 5, "trangThai": "Đã duyệt"})))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(envelope.message(), Some("OK"));
}

#[tokio::test]
async fn business_failure_surfaces_as_reported_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/NhanVien/get-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 403, "message": "Không đủ quyền"})))
        .mount(&server)
        .await;

    let (interpreter, recorder) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));

    let error = api.get("/NhanVien/get-list").await.unwrap_err();
    assert!(error.already_reported());
    assert_eq!(error.api_error(), Some(&ApiError::Forbidden("Không đủ quyền".to_string())));
    assert_eq!(recorder.notices(), vec![("Không đủ quyền".to_string(), NoticeLevel::Warning)]);
}

#[tokio::test]
async fn network_failure_raises_no_notice() {
    let config = ApiConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        timeout_secs: 2,
    };
    let (interpreter, recorder) = recording_interpreter();
    let api = ApiClient::new(&config, interpreter).unwrap();

    let error = api.get("/ChamCong/MyToday").await.unwrap_err();
    assert!(matches!(error, HrError::NetworkError { .. }));
    assert!(!error.already_reported());
    assert!(recorder.notices().is_empty());
}

#[tokio::test]
async fn download_failure_uses_caller_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/BangLuong/export-excel"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (interpreter, recorder) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));

    let error = api
        .download("/BangLuong/export-excel", &[("thang", None), ("nam", None)], "Không thể xuất Excel")
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Không thể xuất Excel");
    assert!(recorder.notices().is_empty());
}

#[tokio::test]
async fn download_omits_empty_query_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/BangLuong/export-pdf"))
        .and(query_param("nam", "2024"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7".to_vec()))
        .mount(&server)
        .await;

    let (interpreter, _) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));

    let bytes = api
        .download(
            "/BangLuong/export-pdf",
            &[("thang", Some(String::new())), ("nam", Some("2024".to_string()))],
            "Không thể xuất PDF",
        )
        .await
        .unwrap();
    assert_eq!(bytes, b"%PDF-1.7");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("nam=2024"));
    assert!(!requests[0].headers.contains_key("content-type"));
}

#[tokio::test]
async fn upload_returns_json_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/BangLuong/import-excel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "data": {"successCount": 3, "errorCount": 0, "errors": []}
        })))
        .mount(&server)
        .await;

    let (interpreter, _) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));

    let envelope = api
        .upload("/BangLuong/import-excel", "luong.xlsx", b"PK".to_vec(), "Không thể import Excel")
        .await
        .unwrap();
    assert!(envelope.is_success());

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn upload_rejects_non_json_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/BangLuong/import-excel"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>").insert_header("content-type", "text/html"))
        .mount(&server)
        .await;

    let (interpreter, _) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));

    let error = api
        .upload("/BangLuong/import-excel", "luong.xlsx", Vec::new(), "Không thể import Excel")
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Unexpected response: <html>oops</html>");
}

#[tokio::test]
async fn upload_reports_missing_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/BangLuong/import-excel"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let (interpreter, _) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));

    let error = api
        .upload("/BangLuong/import-excel", "luong.xlsx", Vec::new(), "Không thể import Excel")
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Endpoint không tồn tại. Vui lòng kiểm tra lại backend đã được restart chưa."
    );
}

#[tokio::test]
async fn upload_error_falls_back_to_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/BangLuong/import-excel"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"statusCode": 400})))
        .mount(&server)
        .await;

    let (interpreter, _) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));

    let error = api
        .upload("/BangLuong/import-excel", "luong.xlsx", Vec::new(), "Không thể import Excel")
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "HTTP 400: Không thể import Excel");
}
