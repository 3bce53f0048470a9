use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gatewayctl::client::GatewayClient;
use gatewayctl::error::GatewayError;
use gatewayctl::models::{KeyResponse, TeamMember};

fn client_for(server: &MockServer) -> GatewayClient {
    GatewayClient::new(&server.uri(), "sk-test").unwrap()
}

#[tokio::test]
async fn every_request_carries_the_auth_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/team/list"))
        .and(header("x-api-key", "sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let teams = client_for(&server).list_teams().await.unwrap();
    assert!(teams.is_empty());
}

#[tokio::test]
async fn non_2xx_surfaces_as_api_error_not_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/key/info"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"code": "missing_key", "message": "no api key"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_key_info("sk-whatever")
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    match err {
        GatewayError::Api { code, message } => {
            assert_eq!(code, "missing_key");
            assert_eq!(message, "no api key");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Nothing listens here; the request must fail before any status exists.
    let client = GatewayClient::new("http://127.0.0.1:9", "sk-test").unwrap();

    let err = client.list_teams().await.unwrap_err();
    assert!(!err.is_api_error());
    assert!(matches!(err, GatewayError::Network(_)));
}

#[tokio::test]
async fn malformed_error_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/key/info"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_key_info("k").await.unwrap_err();
    assert!(matches!(err, GatewayError::Decode(_)));
}

fn key_info_body(key_id: &str, name: &str) -> serde_json::Value {
    json!({
        "key": key_id,
        "info": {
            "key_name": name,
            "key_alias": "ci",
            "spend": 1.25,
            "models": ["all-team-models"],
            "team_id": "0dbaa4dd-8523-4e05-8d43-91b7dd80f671",
            "created_at": "2024-03-01T12:30:45Z"
        }
    })
}

#[tokio::test]
async fn team_keys_fans_out_one_info_call_per_key() {
    let server = MockServer::start().await;
    let team_id = "0dbaa4dd-8523-4e05-8d43-91b7dd80f671";

    Mock::given(method("GET"))
        .and(path("/key/list"))
        .and(query_param("team_id", team_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": ["k1", "k2", "k3"],
            "total_count": 3,
            "current_page": 1,
            "total_pages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    for key_id in ["k1", "k2", "k3"] {
        Mock::given(method("GET"))
            .and(path("/key/info"))
            .and(query_param("key", key_id))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(key_info_body(key_id, "sk-proxy-abcd")),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let keys = client_for(&server).list_team_keys(team_id).await.unwrap();
    assert_eq!(keys.len(), 3);
    assert_eq!(keys[0].key, "k1");
    // Mock expectations (exactly 1 list + 3 info calls) verify on drop.
}

#[tokio::test]
async fn team_keys_aborts_on_first_failing_key() {
    let server = MockServer::start().await;
    let team_id = "0dbaa4dd-8523-4e05-8d43-91b7dd80f671";

    Mock::given(method("GET"))
        .and(path("/key/list"))
        .and(query_param("team_id", team_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": ["k1", "k2", "k3"],
            "total_count": 3,
            "current_page": 1,
            "total_pages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/key/info"))
        .and(query_param("key", "k1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(key_info_body("k1", "sk-proxy-abcd")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/key/info"))
        .and(query_param("key", "k2"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"code": "forbidden", "message": "not yours"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    // The 3rd key must never be fetched after the 2nd fails.
    Mock::given(method("GET"))
        .and(path("/key/info"))
        .and(query_param("key", "k3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(key_info_body("k3", "sk-proxy-abcd")),
        )
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_team_keys(team_id)
        .await
        .unwrap_err();
    assert!(err.is_api_error());
}

#[tokio::test]
async fn add_member_posts_the_member_list_shape() {
    let server = MockServer::start().await;
    let team_id = "0dbaa4dd-8523-4e05-8d43-91b7dd80f671";

    Mock::given(method("POST"))
        .and(path("/team/member_add"))
        .and(body_json(json!({
            "member": [{"user_id": "user_456", "user_email": null, "role": "admin"}],
            "team_id": team_id
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "team_id": team_id,
            "team_alias": "CLINE"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let member = TeamMember {
        user_id: "user_456".into(),
        user_email: None,
        role: "admin".into(),
    };

    let response = client_for(&server)
        .add_team_member(team_id, member)
        .await
        .unwrap();
    assert_eq!(response.team_alias.as_deref(), Some("CLINE"));
}

#[tokio::test]
async fn user_info_queries_by_id_or_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/info"))
        .and(query_param("user_id", "user_456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "user_456",
            "user_info": {"user_id": "user_456", "spend": 0.5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user/info"))
        .and(query_param("email", "a@b.io"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "user_456",
            "user_info": {"user_id": "user_456", "user_email": "a@b.io", "spend": 0.5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let by_id = client
        .get_user_info(&gatewayctl::resolver::UserSelector::Id("user_456".into()))
        .await
        .unwrap();
    assert_eq!(by_id.user_id.as_deref(), Some("user_456"));

    let by_email = client
        .get_user_info(&gatewayctl::resolver::UserSelector::Email("a@b.io".into()))
        .await
        .unwrap();
    assert_eq!(
        by_email.user_info.unwrap().user_email.as_deref(),
        Some("a@b.io")
    );
}

#[test]
fn decoded_responses_round_trip_through_json_output() {
    let response: KeyResponse =
        serde_json::from_value(key_info_body("k1", "sk-proxy-abcd")).unwrap();

    // JSON mode prints to_string_pretty; decoding that output must give back
    // the same structure.
    let emitted = serde_json::to_string_pretty(&response).unwrap();
    let reparsed: KeyResponse = serde_json::from_str(&emitted).unwrap();
    assert_eq!(reparsed, response);
}
