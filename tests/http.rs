use std::time::Duration;

use simpro::{
    AccountNumber, Iccid, Method, Page, SimProClient, SimProError, SimUsageQuery, SimsListFilter,
    TariffListFilter,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SimProClient {
    SimProClient::builder()
        .base_url(server.uri())
        .api_key("test-key")
        .api_client("test-client")
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_sims_sends_auth_headers_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sims"))
        .and(query_param("status", "active"))
        .and(query_param("tariff_name", "IoT 1GB"))
        .and(header("x-api-key", "test-key"))
        .and(header("x-api-client", "test-client"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"sims":[{"id":1,"iccid":"8901...","status":"active"}],"sim_count":1}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = SimsListFilter::default().status("active").tariff_name("IoT 1GB");
    let response = client.sims().get_sims(&filter).await.unwrap();

    assert_eq!(response.sim_count, 1);
    assert_eq!(response.sims[0].id, 1);
    assert_eq!(response.sims[0].iccid, "8901...");
    assert_eq!(response.sims[0].status, "active");
}

#[tokio::test]
async fn empty_credentials_are_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tariffs"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_api_key("");
    client.tariffs().get_tariffs(&TariffListFilter::default()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-api-key").is_none());
    assert_eq!(
        requests[0]
            .headers
            .get("x-api-client")
            .and_then(|value| value.to_str().ok()),
        Some("test-client")
    );
}

#[tokio::test]
async fn sim_location_uses_path_and_query_iccid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sims/8944/location"))
        .and(query_param("iccid", "8944"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"latitude":"51.5","longitude":"-0.12","postal_code":"EC1A","timestamp":"t"}]"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let locations = client.sims().get_sim_location("8944").await.unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].latitude, "51.5");
}

#[tokio::test]
async fn usage_and_tariff_lists_are_comma_joined() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sims/usage"))
        .and(query_param("iccid", "8944,8945"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"sims":[]}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tariffs"))
        .and(query_param("account_numbers", "A1,B2"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let usage = SimUsageQuery::for_iccids(vec![
        Iccid::new("8944").unwrap(),
        Iccid::new("8945").unwrap(),
    ])
    .page(Page::new(2, 10));
    assert!(client.sims().get_sim_usage(&usage).await.unwrap().sims.is_empty());

    let tariffs = TariffListFilter::for_accounts(vec![
        AccountNumber::new("A1").unwrap(),
        AccountNumber::new("B2").unwrap(),
    ]);
    assert!(client.tariffs().get_tariffs(&tariffs).await.unwrap().is_empty());
}

#[tokio::test]
async fn not_found_is_reported_with_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sims/404/location"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"not found"}"#))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.sims().get_sim_location("404").await.unwrap_err();
    match err {
        SimProError::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"error":"not found"}"#);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_is_a_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sims"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .sims()
        .get_sims(&SimsListFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SimProError::Decoding { .. }));
}

#[tokio::test]
async fn configured_timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sims"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"sims":[]}"#, "application/json")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = SimProClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = client
        .sims()
        .get_sims(&SimsListFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SimProError::Transport(_)));
}

#[tokio::test]
async fn execute_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sims/notes"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = serde_json::json!({ "iccid": "8944", "note": "spare" });
    let body = client
        .execute(Method::POST, "/sims/notes", Some(&payload))
        .await
        .unwrap();
    assert_eq!(body, b"created");

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, payload);
}
