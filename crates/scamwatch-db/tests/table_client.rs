//! Integration tests for `TableClient` and the loader using wiremock.

use scamwatch_core::PostRecord;
use scamwatch_db::{load_posts, DbError, InsertPost, TableClient};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> TableClient {
    TableClient::new(base_url, "test-key", 30).expect("client construction should not fail")
}

fn record(username: &str, date: &str) -> PostRecord {
    PostRecord {
        name: "Some Name".to_string(),
        username: username.to_string(),
        text: "#crypto #ad giveaway".to_string(),
        date: date.to_string(),
        post_id: None,
    }
}

#[tokio::test]
async fn insert_post_sends_auth_headers_and_reports_inserted_row() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/posts"))
        .and(header("apikey", "test-key"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("prefer", "return=representation"))
        .and(body_partial_json(serde_json::json!({
            "username": "@1CrypticPoet",
            "description": "New Ripple Ad"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!([
            { "id": 1, "name": "poet.base.eth", "username": "@1CrypticPoet",
              "description": "New Ripple Ad", "date": "2020-11-25T00:00:00" }
        ])))
        .mount(&server)
        .await;

    let inserted = test_client(&server.uri())
        .insert_post(&InsertPost {
            name: "poet.base.eth",
            username: "@1CrypticPoet",
            description: "New Ripple Ad",
            date: "2020-11-25T00:00:00",
        })
        .await
        .expect("insert should succeed");

    assert!(inserted);
}

#[tokio::test]
async fn empty_representation_counts_as_not_inserted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let inserted = test_client(&server.uri())
        .insert_post(&InsertPost {
            name: "",
            username: "@x",
            description: "",
            date: "",
        })
        .await
        .expect("call should succeed");

    assert!(!inserted);
}

#[tokio::test]
async fn rejected_insert_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .insert_post(&InsertPost {
            name: "",
            username: "@x",
            description: "",
            date: "",
        })
        .await
        .expect_err("should fail");

    match err {
        DbError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected Api error, got: {other}"),
    }
}

#[tokio::test]
async fn list_posts_reads_back_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/posts"))
        .and(query_param("select", "*"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "John Memes", "username": "@temitopek66",
              "description": "#memecoin", "date": "2024-12-04T00:00:00" },
            { "id": 2, "name": "AdPod", "username": "@AdPodxyz",
              "description": "attention meter", "date": "2024-12-11T00:00:00" }
        ])))
        .mount(&server)
        .await;

    let rows = test_client(&server.uri())
        .list_posts()
        .await
        .expect("read-back should succeed");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].username, "@temitopek66");
    assert_eq!(rows[1].name, "AdPod");
}

#[tokio::test]
async fn loader_normalizes_dates_and_counts_successes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!([
            { "id": 1 }
        ])))
        .mount(&server)
        .await;

    let records = vec![
        record("@temitopek66", "Dec 4, 2024"),
        record("@1CrypticPoet", "Nov 25, 2020"),
        record("@web3Polar", "sometime last week"),
    ];

    let summary = load_posts(&test_client(&server.uri()), &records).await;
    assert_eq!(summary.success, 3);
    assert_eq!(summary.failure, 0);

    let requests = server.received_requests().await.expect("requests recorded");
    let dates: Vec<String> = requests
        .iter()
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).expect("json body");
            body["date"].as_str().expect("date field").to_string()
        })
        .collect();

    assert!(dates.contains(&"2024-12-04T00:00:00".to_string()));
    assert!(dates.contains(&"2020-11-25T00:00:00".to_string()));
    // Unparseable date is kept raw, not dropped.
    assert!(dates.contains(&"sometime last week".to_string()));
}

#[tokio::test]
async fn loader_counts_failures_without_aborting_the_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/posts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("insert failed"))
        .expect(2)
        .mount(&server)
        .await;

    let records = vec![
        record("@a", "Dec 4, 2024"),
        record("@b", "Dec 5, 2024"),
    ];

    let summary = load_posts(&test_client(&server.uri()), &records).await;
    assert_eq!(summary.success, 0);
    assert_eq!(summary.failure, 2);
}
