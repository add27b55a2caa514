//! End-to-end tests against a local mock server: URL construction, query
//! omission, error mapping and session cookie replay.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use vrchat_client::{Client, ClientError, Config, FavoritesQuery, Pagination};
use vrchat_types::FavoriteType;
use wiremock::matchers::{
    body_json, header, header_exists, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::with_config(Config::new(Url::parse(&server.uri()).unwrap())).unwrap()
}

#[tokio::test]
async fn get_favorite_hits_substituted_path_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/favorites/fvrt_c1644b5b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "favoriteId": "avtr_deadbeef",
            "id": "fvrt_c1644b5b",
            "tags": ["avatars1"],
            "type": "avatar"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let favorite = client.get_favorite(&"fvrt_c1644b5b".into()).await.unwrap();

    assert_eq!(favorite.favorite_id, "avtr_deadbeef");
    assert_eq!(favorite.id.as_str(), "fvrt_c1644b5b");
    assert_eq!(favorite.favorite_type, FavoriteType::Avatar);
}

#[tokio::test]
async fn instance_endpoints_use_colon_joined_composite_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/instances/wrld_1:12345/shortName"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "secureName": "whatever-secure"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let names = client
        .get_instance_short_name(&"wrld_1".into(), "12345")
        .await
        .unwrap();

    assert_eq!(names.secure_name, "whatever-secure");
    assert_eq!(names.short_name, None);
}

#[tokio::test]
async fn unset_query_params_are_omitted_and_zero_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/favorites"))
        .and(query_param("n", "0"))
        .and(query_param("tag", "worlds1"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let favorites = client
        .get_favorites(&FavoritesQuery {
            page: Pagination {
                n: Some(0),
                offset: None,
            },
            tag: Some("worlds1".to_string()),
        })
        .await
        .unwrap();

    assert!(favorites.is_empty());
}

#[tokio::test]
async fn non_2xx_yields_status_error_with_literal_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream fell over"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get_health().await.unwrap_err();

    match error {
        ClientError::Status {
            status,
            message,
            body,
        } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(message, None);
            assert_eq!(body, "upstream fell over");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn envelope_message_is_parsed_from_error_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "\"Missing Credentials\"", "status_code": 401}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get_current_user().await.unwrap_err();

    match error {
        ClientError::Status {
            status, message, ..
        } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message.as_deref(), Some("\"Missing Credentials\""));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn authenticate_sends_basic_auth_and_replays_session_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/twofactorauth/totp/verify"))
        .and(header_exists("authorization"))
        .and(body_json(json!({"code": "123456"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "auth=authcookie_123; Path=/; HttpOnly")
                .set_body_json(json!({"verified": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth"))
        .and(header("cookie", "auth=authcookie_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "token": "authcookie_123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .authenticate("username", "hunter2", "123456")
        .await
        .unwrap();

    // The follow-up request carries the jar cookie, not credentials.
    let token = client.verify_auth_token().await.unwrap();
    assert!(token.ok);
    assert_eq!(token.token, "authcookie_123");
}

#[tokio::test]
async fn authenticate_failure_carries_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/twofactorauth/totp/verify"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"error":{"message":"Invalid Username or Password"}}"#),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .authenticate("username", "wrong", "000000")
        .await
        .unwrap_err();

    match error {
        ClientError::Auth(body) => assert!(body.contains("Invalid Username or Password")),
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn list_response_decodes_into_schema_vec() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/user/friends"))
        .and(query_param("offline", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "developerType": "none",
            "displayName": "tupper",
            "id": "usr_1",
            "isFriend": true,
            "last_platform": "standalonewindows",
            "status": "join me",
            "statusDescription": "",
            "tags": []
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let friends = client
        .get_friends(vrchat_client::FriendsQuery {
            page: Pagination::default(),
            offline: Some(false),
        })
        .await
        .unwrap();

    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].display_name, "tupper");
    assert_eq!(friends[0].status, vrchat_types::UserStatus::JoinMe);
}

#[tokio::test]
async fn text_endpoint_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/css/app.css"))
        .and(query_param("variant", "public"))
        .respond_with(ResponseTemplate::new(200).set_body_string("body { margin: 0; }"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let css = client
        .get_css(&vrchat_client::FrontendAssetQuery {
            variant: Some("public".to_string()),
            branch: None,
        })
        .await
        .unwrap();

    assert_eq!(css, "body { margin: 0; }");
}
