//! Integration tests for the registry HTTP client.
//!
//! A mockito server stands in for the community registry. Coverage:
//! - query parameter construction (version=latest, q, cursor)
//! - multi-page pagination following next_cursor
//! - error surfacing for non-2xx statuses, unreachable hosts, bad JSON
//! - single-server lookup endpoints

use std::time::Duration;

use mockito::{Matcher, Server};

use mcp_registry::RegistryClient;

fn test_client(base_url: &str) -> RegistryClient {
    RegistryClient::with_base_url(base_url, Duration::from_secs(5))
        .expect("client should build")
}

fn listing_body(names: &[&str], next_cursor: Option<&str>) -> String {
    let servers: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "server": {"name": name, "version": "1.0.0", "description": "a test server"}
            })
        })
        .collect();

    let mut metadata = serde_json::json!({"count": names.len()});
    if let Some(cursor) = next_cursor {
        metadata["next_cursor"] = serde_json::Value::String(cursor.to_string());
    }

    serde_json::json!({"servers": servers, "metadata": metadata}).to_string()
}

#[tokio::test]
async fn single_page_listing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v0/servers")
        .match_query(Matcher::Exact("version=latest".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(listing_body(
            &["io.example/server1", "io.example/server2"],
            None,
        ))
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let servers = client.list_servers("").await.expect("listing should succeed");

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].name, "io.example/server1");
    assert_eq!(servers[1].name, "io.example/server2");
    mock.assert_async().await;
}

#[tokio::test]
async fn multi_page_pagination_preserves_order() {
    let mut server = Server::new_async().await;

    // Exact query matchers keep the three pages mutually exclusive.
    let page1 = server
        .mock("GET", "/v0/servers")
        .match_query(Matcher::Exact("version=latest".to_string()))
        .with_status(200)
        .with_body(listing_body(&["io.example/page1-server"], Some("cursor-page2")))
        .expect(1)
        .create_async()
        .await;
    let page2 = server
        .mock("GET", "/v0/servers")
        .match_query(Matcher::Exact(
            "version=latest&cursor=cursor-page2".to_string(),
        ))
        .with_status(200)
        .with_body(listing_body(&["io.example/page2-server"], Some("cursor-page3")))
        .expect(1)
        .create_async()
        .await;
    let page3 = server
        .mock("GET", "/v0/servers")
        .match_query(Matcher::Exact(
            "version=latest&cursor=cursor-page3".to_string(),
        ))
        .with_status(200)
        .with_body(listing_body(&["io.example/page3-server"], None))
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let servers = client.list_servers("").await.expect("listing should succeed");

    assert_eq!(servers.len(), 3);
    assert_eq!(servers[0].name, "io.example/page1-server");
    assert_eq!(servers[1].name, "io.example/page2-server");
    assert_eq!(servers[2].name, "io.example/page3-server");

    page1.assert_async().await;
    page2.assert_async().await;
    page3.assert_async().await;
}

#[tokio::test]
async fn search_query_is_forwarded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v0/servers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("version".to_string(), "latest".to_string()),
            Matcher::UrlEncoded("q".to_string(), "weather".to_string()),
        ]))
        .with_status(200)
        .with_body(listing_body(&["io.example/weather-mcp"], None))
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let servers = client
        .list_servers("weather")
        .await
        .expect("search should succeed");

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].name, "io.example/weather-mcp");
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_surfaces_status_code() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v0/servers")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.list_servers("").await.unwrap_err();

    assert!(
        err.to_string().contains("500"),
        "error should name status 500, got: {err}"
    );
}

#[tokio::test]
async fn unreachable_host_reports_request_failure() {
    // Nothing listens on port 1.
    let client = test_client("http://127.0.0.1:1");
    let err = client.list_servers("").await.unwrap_err();

    assert!(
        err.to_string().contains("failed to execute request"),
        "error should identify a request execution failure, got: {err}"
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v0/servers")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not-json")
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.list_servers("").await.unwrap_err();

    assert!(
        err.to_string().contains("failed to unmarshal response"),
        "error should identify a decode failure, got: {err}"
    );
}

#[tokio::test]
async fn failed_page_discards_earlier_pages() {
    let mut server = Server::new_async().await;
    let _page1 = server
        .mock("GET", "/v0/servers")
        .match_query(Matcher::Exact("version=latest".to_string()))
        .with_status(200)
        .with_body(listing_body(&["io.example/page1-server"], Some("cursor-page2")))
        .create_async()
        .await;
    let _page2 = server
        .mock("GET", "/v0/servers")
        .match_query(Matcher::Exact(
            "version=latest&cursor=cursor-page2".to_string(),
        ))
        .with_status(502)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let err = client.list_servers("").await.unwrap_err();

    // All-or-nothing: the page-1 record must not leak out with the error.
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn get_server_looks_up_one_version() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v0/servers/io.example%2Fweather/versions/1.2.0")
        .with_status(200)
        .with_body(
            serde_json::json!({
                "server": {"name": "io.example/weather", "version": "1.2.0", "description": "forecasts"}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let url = mcp_registry::ServerUrl::parse(&format!(
        "{}/v0/servers/io.example%2Fweather/versions/1.2.0",
        server.url()
    ))
    .expect("reference should parse");

    let record = client.get_server(&url).await.expect("lookup should succeed");
    assert_eq!(record.name, "io.example/weather");
    assert_eq!(record.version, "1.2.0");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_server_versions_lists_all_versions() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v0/servers/io.example%2Fweather/versions")
        .with_status(200)
        .with_body(
            serde_json::json!({
                "servers": [
                    {"server": {"name": "io.example/weather", "version": "1.2.0"}},
                    {"server": {"name": "io.example/weather", "version": "1.1.0"}},
                ],
                "metadata": {"count": 2},
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server.url());
    let url = mcp_registry::ServerUrl::parse(&format!(
        "{}/v0/servers/io.example%2Fweather",
        server.url()
    ))
    .expect("reference should parse");

    let versions = client
        .get_server_versions(&url)
        .await
        .expect("versions lookup should succeed");
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].version, "1.2.0");
    assert_eq!(versions[1].version, "1.1.0");
    mock.assert_async().await;
}
