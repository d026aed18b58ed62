use hrdesk::enums::candidate_stage::CandidateStage;
use hrdesk::enums::notice_level::NoticeLevel;
use hrdesk::services::candidate_board::{CandidateBoard, MoveOutcome, MOVE_SUCCESS};
use hrdesk::services::hr::candidate_service::CandidateService;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use crate::common::{client, recording_interpreter};

async fn board_from(server: &MockServer, api: &CandidateService<'_>) -> CandidateBoard {
    Mock::given(method("GET"))
        .and(path("/api/UngVien/get-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "data": [
                {"id": 1, "hoTen": "Phạm Minh", "trangThaiHienTai": 0},
                {"id": 2, "hoTen": "Đỗ Hà", "trangThaiHienTai": 1},
                {"id": 3, "hoTen": "Vũ Lan", "trangThaiHienTai": null},
                {"id": 4, "hoTen": "Hoàng Nam", "trangThaiHienTai": 7}
            ]
        })))
        .mount(server)
        .await;

    CandidateBoard::new(api.list().await.unwrap())
}

#[tokio::test]
async fn unknown_stages_land_in_the_first_column() {
    let server = MockServer::start().await;
    let (interpreter, _) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));
    let service = CandidateService::new(&api);

    let board = board_from(&server, &service).await;

    let first: Vec<i64> = board.column(CandidateStage::New).cards.iter().map(|c| c.id).collect();
    assert_eq!(first, vec![1, 3, 4]);
    assert_eq!(board.column(CandidateStage::Interview).cards.len(), 1);
    assert!(board.column(CandidateStage::Offer).cards.is_empty());
}

#[tokio::test]
async fn same_column_move_makes_no_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/UngVien/update-ung-vien"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 200})))
        .expect(0)
        .mount(&server)
        .await;

    let (interpreter, recorder) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));
    let service = CandidateService::new(&api);
    let mut board = board_from(&server, &service).await;

    let outcome = board
        .move_card(2, CandidateStage::Interview, &service, recorder.as_ref())
        .await
        .unwrap();

    assert_eq!(outcome, MoveOutcome::Unchanged);
    assert!(recorder.notices().is_empty());
}

#[tokio::test]
async fn accepted_move_updates_board_and_notifies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/UngVien/update-ung-vien"))
        .and(body_json(json!({"Id": 1, "TrangThaiHienTai": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let (interpreter, recorder) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));
    let service = CandidateService::new(&api);
    let mut board = board_from(&server, &service).await;

    let outcome = board
        .move_card(1, CandidateStage::Offer, &service, recorder.as_ref())
        .await
        .unwrap();

    assert_eq!(outcome, MoveOutcome::Moved { from: CandidateStage::New, to: CandidateStage::Offer });
    assert_eq!(board.locate(1), Some(CandidateStage::Offer));
    assert_eq!(recorder.notices(), vec![(MOVE_SUCCESS.to_string(), NoticeLevel::Success)]);
}

#[tokio::test]
async fn rejected_move_is_reverted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/UngVien/update-ung-vien"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 500, "message": "Lỗi cập nhật"})))
        .mount(&server)
        .await;

    let (interpreter, recorder) = recording_interpreter();
    let api = client(&server, interpreter, Some("t"));
    let service = CandidateService::new(&api);
    let mut board = board_from(&server, &service).await;
    let before = board.clone();

    let error = board
        .move_card(2, CandidateStage::Offer, &service, recorder.as_ref())
        .await
        .unwrap_err();

    assert!(error.already_reported());
    assert_eq!(board.locate(2), Some(CandidateStage::Interview));
    assert_eq!(board.len(), before.len());
    assert_eq!(recorder.notices(), vec![("Lỗi cập nhật".to_string(), NoticeLevel::Danger)]);
}
