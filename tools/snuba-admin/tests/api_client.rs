//! AdminApiClient against an in-process stand-in for the admin service.

use std::net::SocketAddr;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use serde_json::json;
use tokio_test::assert_ok;

use snuba_admin::api::{AdminApiClient, ApiError, ConfigValue, SystemQuery};
use snuba_admin::domain::{App, LoadState, NavigationRegistry, PanelData, PanelKind};

/// Serve `router` on an ephemeral loopback port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/", addr)
}

fn json_route(path: &str, body: serde_json::Value) -> Router {
    Router::new().route(
        path,
        get(move || {
            let body = body.clone();
            async move { axum::Json(body) }
        }),
    )
}

#[tokio::test]
async fn test_get_configs_scenario() {
    let base = serve(json_route(
        "/configs",
        json!({"max_rows": 1000, "cluster": "default"}),
    ))
    .await;
    let client = AdminApiClient::new(base).unwrap();

    let configs = assert_ok!(client.get_configs().await);

    assert_eq!(configs.len(), 2);
    assert_eq!(configs["max_rows"], ConfigValue::from(1000_i64));
    assert_eq!(configs["cluster"], ConfigValue::from("default"));
}

#[tokio::test]
async fn test_get_queries_scenario() {
    let base = serve(json_route(
        "/clickhouse_queries",
        json!([{"name": "slow_queries", "sql": "SELECT 1", "description": null}]),
    ))
    .await;
    let client = AdminApiClient::new(base).unwrap();

    let queries = client.get_queries().await.unwrap();

    assert_eq!(
        queries,
        vec![SystemQuery {
            name: "slow_queries".to_string(),
            sql: "SELECT 1".to_string(),
            description: None,
        }]
    );
}

#[tokio::test]
async fn test_get_queries_preserves_order() {
    let names = ["zeta", "alpha", "mid", "alpha"];
    let body: Vec<_> = names
        .iter()
        .map(|n| json!({"name": n, "sql": format!("SELECT '{n}'"), "description": "d"}))
        .collect();
    let base = serve(json_route("/clickhouse_queries", json!(body))).await;
    let client = AdminApiClient::new(base).unwrap();

    let queries = client.get_queries().await.unwrap();

    let got: Vec<&str> = queries.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(got, names);
}

#[tokio::test]
async fn test_error_status_is_distinct_from_parse_error() {
    let router = Router::new().route(
        "/configs",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({"error": "redis unavailable"})),
            )
                .into_response()
        }),
    );
    let base = serve(router).await;
    let client = AdminApiClient::new(base).unwrap();

    match client.get_configs().await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.contains("redis unavailable"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_endpoint_is_status_error() {
    let base = serve(Router::new()).await;
    let client = AdminApiClient::new(base).unwrap();

    assert!(matches!(
        client.get_queries().await,
        Err(ApiError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let router = Router::new().route("/configs", get(|| async { "not json {" }));
    let base = serve(router).await;
    let client = AdminApiClient::new(base).unwrap();

    assert!(matches!(client.get_configs().await, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_wrong_shape_is_parse_error() {
    let base = serve(
        json_route("/configs", json!({"enabled": true}))
            .merge(json_route("/clickhouse_queries", json!({"name": "not a list"}))),
    )
    .await;
    let client = AdminApiClient::new(base).unwrap();

    assert!(matches!(client.get_configs().await, Err(ApiError::Parse(_))));
    assert!(matches!(client.get_queries().await, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_transport_failure_rejects() {
    // Reserve a port, then close it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AdminApiClient::new(format!("http://{}/", addr)).unwrap();

    assert!(matches!(
        client.get_configs().await,
        Err(ApiError::Connection(_))
    ));
    assert!(matches!(
        client.get_queries().await,
        Err(ApiError::Connection(_))
    ));
}

#[tokio::test]
async fn test_concurrent_calls() {
    let base = serve(
        json_route("/configs", json!({"a": 1}))
            .merge(json_route("/clickhouse_queries", json!([]))),
    )
    .await;
    let client = AdminApiClient::new(base).unwrap();

    let (configs, queries) = tokio::join!(client.get_configs(), client.get_queries());

    assert_eq!(assert_ok!(configs).len(), 1);
    assert!(assert_ok!(queries).is_empty());
}

#[tokio::test]
async fn test_base_path_is_appended_verbatim() {
    let router = Router::new().nest(
        "/admin",
        json_route("/configs", json!({"cluster": "default"})),
    );
    let base = serve(router).await;
    let client = AdminApiClient::new(format!("{base}admin/")).unwrap();

    assert_eq!(client.get_configs().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_panel_fetch_flows_into_app() {
    let base = serve(
        json_route("/configs", json!({"max_rows": 1000}))
            .merge(json_route("/clickhouse_queries", json!([]))),
    )
    .await;
    let client = AdminApiClient::new(base).unwrap();

    let mut app = App::new();
    app.select(NavigationRegistry::standard().position("config").unwrap());
    let kind = app.take_fetch_request().unwrap();
    assert_eq!(kind, PanelKind::RuntimeConfig);

    let result = kind.fetch(&client).await;
    assert!(matches!(result, Ok(PanelData::Configs(_))));
    app.apply(kind, result);

    let configs = app.configs.loaded().unwrap();
    assert_eq!(configs["max_rows"].as_i64(), Some(1000));
    assert_eq!(app.queries, LoadState::Idle);
}
