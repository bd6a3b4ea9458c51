//! HTTP surface tests: advertisement and invocation routes over a full
//! gateway state, with external resources mocked.

use axum_test::TestServer;
use portico::utils::config::{
    AgendaConfig, Config, DatabaseConfig, FetchConfig, SearchConfig, ServerConfig,
};
use portico::AppState;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(dir: &TempDir, mock_uri: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            path: dir
                .path()
                .join("events.db")
                .to_str()
                .expect("utf-8 temp path")
                .to_string(),
        },
        search: SearchConfig {
            endpoint: format!("{}/html/", mock_uri),
        },
        fetch: FetchConfig {
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 10,
        },
        agenda: AgendaConfig {
            url: format!("{}/agenda/", mock_uri),
        },
    }
}

async fn test_server(dir: &TempDir, mock: &MockServer) -> TestServer {
    let state = AppState::from_config(test_config(dir, &mock.uri()))
        .await
        .expect("failed to build state");
    TestServer::new(portico::api::router(state)).expect("failed to create test server")
}

#[tokio::test]
async fn test_root_reports_service_info() {
    let dir = TempDir::new().unwrap();
    let mock = MockServer::start().await;
    let server = test_server(&dir, &mock).await;

    let response = server.get("/").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "portico tool gateway");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let dir = TempDir::new().unwrap();
    let mock = MockServer::start().await;
    let server = test_server(&dir, &mock).await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_tool_advertisement_lists_all_four_tools_in_order() {
    let dir = TempDir::new().unwrap();
    let mock = MockServer::start().await;
    let server = test_server(&dir, &mock).await;

    let response = server.get("/tools").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "query_events_db",
            "web_search",
            "summarize_url",
            "parse_datacraft_events"
        ]
    );

    for tool in body.as_array().unwrap() {
        assert!(!tool["description"].as_str().unwrap().is_empty());
        assert!(tool["parameters"]["properties"].is_object());
    }
}

#[tokio::test]
async fn test_invoke_query_tool_over_http() {
    let dir = TempDir::new().unwrap();
    let mock = MockServer::start().await;
    let server = test_server(&dir, &mock).await;

    let response = server
        .post("/tools/query_events_db")
        .json(&json!({ "query": "SELECT COUNT(*) FROM evenements" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["output"]["text"], "\n(0,)");
}

#[tokio::test]
async fn test_unknown_tool_is_a_data_failure_not_a_transport_error() {
    let dir = TempDir::new().unwrap();
    let mock = MockServer::start().await;
    let server = test_server(&dir, &mock).await;

    let response = server.post("/tools/launch_missiles").json(&json!({})).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "err");
    assert_eq!(body["kind"], "unknown_tool");
}

#[tokio::test]
async fn test_invalid_scheme_is_a_data_failure() {
    let dir = TempDir::new().unwrap();
    let mock = MockServer::start().await;
    let server = test_server(&dir, &mock).await;

    let response = server
        .post("/tools/summarize_url")
        .json(&json!({ "url": "ftp://example.org/file" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "err");
    assert_eq!(body["kind"], "invalid_input");
}

#[tokio::test]
async fn test_invoke_agenda_tool_without_body() {
    let dir = TempDir::new().unwrap();
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/agenda/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><div class="tribe-events-calendar-list"></div></body></html>"#,
        ))
        .mount(&mock)
        .await;
    let server = test_server(&dir, &mock).await;

    let response = server.post("/tools/parse_datacraft_events").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["output"]["type"], "events");
    assert_eq!(body["output"]["events"], json!([]));
}

#[tokio::test]
async fn test_missing_argument_names_the_parameter() {
    let dir = TempDir::new().unwrap();
    let mock = MockServer::start().await;
    let server = test_server(&dir, &mock).await;

    let response = server.post("/tools/web_search").json(&json!({})).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "err");
    assert_eq!(body["kind"], "invalid_input");
    assert!(body["message"].as_str().unwrap().contains("'query'"));
}
