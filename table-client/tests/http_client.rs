// table-client/tests/http_client.rs
// HTTP 客户端测试 - 本地 axum 服务

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::{ApiResponse, TableStatus, UpdateTableStatus};
use table_client::{ClientConfig, ClientError, HttpClient, PosApi, Table, TableAction, TableCard};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct ServerState {
    status_updates: Arc<Mutex<Vec<(i64, TableStatus)>>>,
    finished_bills: Arc<Mutex<Vec<i64>>>,
    auth_headers: Arc<Mutex<Vec<String>>>,
}

async fn update_table(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<UpdateTableStatus>,
) -> (StatusCode, Json<ApiResponse<TableStatus>>) {
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        state.auth_headers.lock().unwrap().push(auth.to_string());
    }
    state.status_updates.lock().unwrap().push((id, body.status));
    match id {
        // locked table
        13 => (StatusCode::OK, Json(ApiResponse::error("Mesa bloqueada"))),
        // server refuses to free, keeps it busy
        21 => (StatusCode::OK, Json(ApiResponse::ok(TableStatus::Busy))),
        // accepted without echoing the status
        22 => (StatusCode::OK, Json(ApiResponse::empty())),
        404 => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Table not found")),
        ),
        _ => (StatusCode::OK, Json(ApiResponse::ok(body.status))),
    }
}

async fn bill_by_table(Path(table_id): Path<i64>) -> Json<ApiResponse<Option<i64>>> {
    match table_id {
        7 => Json(ApiResponse::ok(Some(42))),
        8 => Json(ApiResponse::ok(None)),
        _ => Json(ApiResponse::error("Bill lookup failed")),
    }
}

async fn finish_bill(
    State(state): State<ServerState>,
    Path(bill_id): Path<i64>,
) -> Json<ApiResponse<bool>> {
    state.finished_bills.lock().unwrap().push(bill_id);
    Json(ApiResponse::ok(true))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::BAD_GATEWAY, "upstream down")
}

async fn spawn_pos_server() -> (String, ServerState) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = ServerState::default();
    let app = Router::new()
        .route("/api/table/{id}", put(update_table))
        .route("/api/bill/{table_id}", get(bill_by_table))
        .route("/api/bill/finished/{bill_id}", put(finish_bill))
        .route("/api/broken", get(broken))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), state)
}

async fn client() -> (HttpClient, ServerState) {
    let (url, state) = spawn_pos_server().await;
    let client = ClientConfig::new(url)
        .with_token("anon-key")
        .with_timeout(5)
        .build_http_client()
        .unwrap();
    (client, state)
}

#[tokio::test]
async fn test_update_status_returns_accepted_status() {
    let (client, state) = client().await;

    let accepted = client
        .update_table_status(7, TableStatus::Free)
        .await
        .unwrap();
    assert_eq!(accepted, TableStatus::Free);

    let accepted = client
        .update_table_status(21, TableStatus::Free)
        .await
        .unwrap();
    assert_eq!(accepted, TableStatus::Busy);

    assert_eq!(
        *state.status_updates.lock().unwrap(),
        vec![(7, TableStatus::Free), (21, TableStatus::Free)]
    );
    assert_eq!(
        *state.auth_headers.lock().unwrap(),
        vec!["Bearer anon-key".to_string(), "Bearer anon-key".to_string()]
    );
}

#[tokio::test]
async fn test_update_status_without_data_keeps_requested() {
    let (client, _) = client().await;

    let accepted = client
        .update_table_status(22, TableStatus::Completed)
        .await
        .unwrap();
    assert_eq!(accepted, TableStatus::Completed);
}

#[tokio::test]
async fn test_error_envelope_is_rejection() {
    let (client, _) = client().await;

    let err = client
        .update_table_status(13, TableStatus::Free)
        .await
        .unwrap_err();
    match err {
        ClientError::Rejected(rejection) => {
            assert_eq!(rejection.message.as_deref(), Some("Mesa bloqueada"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_envelope_on_http_error_status() {
    let (client, _) = client().await;

    let err = client
        .update_table_status(404, TableStatus::Free)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));
}

#[tokio::test]
async fn test_plain_http_error_maps_by_status() {
    let (client, _) = client().await;

    let err = client.get::<bool>("/api/broken").await.unwrap_err();
    match err {
        ClientError::Internal(body) => assert_eq!(body, "upstream down"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_bill_lookup() {
    let (client, _) = client().await;

    assert_eq!(client.bill_by_table(7).await.unwrap(), Some(42));
    assert_eq!(client.bill_by_table(8).await.unwrap(), None);
    assert!(client.bill_by_table(9).await.is_err());
}

#[tokio::test]
async fn test_finish_bill() {
    let (client, state) = client().await;

    assert!(client.finish_bill(42).await.unwrap());
    assert_eq!(*state.finished_bills.lock().unwrap(), vec![42]);
}

#[tokio::test]
async fn test_card_over_http_print_bill() {
    let (client, state) = client().await;
    let freed = Arc::new(Mutex::new(Vec::new()));
    let sink = freed.clone();

    let mut card = TableCard::mount(
        Arc::new(client),
        Table::new(7, 3, TableStatus::Completed),
        move |id| sink.lock().unwrap().push(id),
    );
    assert_eq!(card.bill_id().await, Some(42));

    card.perform(TableAction::PrintBill).await;
    card.wait_bill_closed().await;

    assert_eq!(card.status(), TableStatus::Free);
    assert_eq!(*freed.lock().unwrap(), vec![7]);
    assert_eq!(*state.finished_bills.lock().unwrap(), vec![42]);
}
