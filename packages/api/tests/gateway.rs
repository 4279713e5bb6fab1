//! Gateway behavior against a mock films API.

use std::cell::Cell;
use std::rc::Rc;

use api::{ApiClient, ApiError, CreateFilm, LoginRequest, Role, Session, SessionHandle, UpdateFilm, User};
use serde_json::json;
use store::{CookieJar, CookieOptions, MemoryJar, TOKEN_COOKIE, USER_COOKIE};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn admin() -> User {
    User {
        id: "u1".to_string(),
        username: "masteryoda".to_string(),
        email: None,
        display_name: Some("Yoda".to_string()),
        role: Role::Admin,
    }
}

fn anonymous() -> (SessionHandle, MemoryJar) {
    let jar = MemoryJar::new();
    (SessionHandle::restore(jar.clone(), CookieOptions::default()), jar)
}

fn signed_in(token: &str) -> (SessionHandle, MemoryJar) {
    let (session, jar) = anonymous();
    session.set(Session::new(token, admin()));
    (session, jar)
}

fn film_json(id: &str, episode: u32) -> serde_json::Value {
    json!({
        "_id": id,
        "title": format!("Episode {episode}"),
        "episode_id": episode,
        "opening_crawl": "A long time ago...",
        "director": "George Lucas",
        "producer": "Gary Kurtz",
        "release_date": "1977-05-25",
        "source": "api",
        "isModified": false
    })
}

#[tokio::test]
async fn test_attaches_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/starwars/films"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([film_json("a", 4)])))
        .expect(1)
        .mount(&server)
        .await;

    let (session, _) = signed_in("secret-token");
    let client = ApiClient::new(server.uri(), session);

    let films = client.list_films().await.unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].episode_id, 4);
}

#[tokio::test]
async fn test_anonymous_requests_have_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/starwars/films/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(film_json("abc", 5)))
        .mount(&server)
        .await;

    let (session, _) = anonymous();
    let client = ApiClient::new(format!("{}/", server.uri()), session);

    let film = client.get_film("abc").await.unwrap();
    assert_eq!(film.id, "abc");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_fires_hook() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/starwars/films/abc"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .mount(&server)
        .await;

    let (session, jar) = signed_in("stale");
    let client = ApiClient::new(server.uri(), session.clone());
    let redirected = Rc::new(Cell::new(false));
    {
        let redirected = redirected.clone();
        let session = session.clone();
        client.on_unauthorized(move || {
            // Session listener was registered first, so it is already gone.
            assert!(!session.is_authenticated());
            redirected.set(true);
        });
    }

    let err = client.delete_film("abc").await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert!(redirected.get());
    assert!(!session.is_authenticated());
    assert!(jar.get(TOKEN_COOKIE).is_none());
    assert!(jar.get(USER_COOKIE).is_none());
}

#[tokio::test]
async fn test_unauthorized_on_any_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (session, _) = signed_in("stale");
    let client = ApiClient::new(server.uri(), session.clone());

    let err = client.get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { message: None }));
    assert!(session.current().is_none());
}

#[tokio::test]
async fn test_status_error_keeps_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/starwars/films"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"statusCode": 400, "message": ["title should not be empty"]})),
        )
        .mount(&server)
        .await;

    let (session, _) = signed_in("tok");
    let client = ApiClient::new(server.uri(), session.clone());

    let err = client.create_film(&CreateFilm::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 400, .. }));
    assert_eq!(err.user_message("Could not save"), "title should not be empty");
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_login_decodes_auth_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/login"))
        .and(body_json(json!({"username": "masteryoda", "password": "Abc12345!"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "access_token": "jwt",
            "user": {"_id": "u1", "username": "masteryoda", "displayName": "Yoda", "role": "admin"}
        })))
        .mount(&server)
        .await;

    let (session, _) = anonymous();
    let client = ApiClient::new(server.uri(), session.clone());

    let response = client
        .login(&LoginRequest {
            username: "masteryoda".to_string(),
            password: "Abc12345!".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.access_token, "jwt");
    assert!(response.user.is_admin());
    // The gateway never writes the session itself.
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_sync_result_with_warnings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/starwars/films/sync"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Sync finished",
            "total": 6,
            "success": 4,
            "failed": 2,
            "errors": ["film X skipped: locally modified", "film Y skipped: locally modified"]
        })))
        .mount(&server)
        .await;

    let (session, _) = signed_in("tok");
    let client = ApiClient::new(server.uri(), session);

    let result = client.sync_films().await.unwrap();
    assert_eq!((result.total, result.success, result.failed), (6, 4, 2));
    assert_eq!(result.errors[0], "film X skipped: locally modified");
}

#[tokio::test]
async fn test_external_films_passes_fullinfo() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/starwars/films/external"))
        .and(query_param("fullinfo", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
        .expect(1)
        .mount(&server)
        .await;

    let (session, _) = anonymous();
    let client = ApiClient::new(server.uri(), session);

    let payload = client.list_external_films(true).await.unwrap();
    assert_eq!(payload, json!({"result": []}));
}

#[tokio::test]
async fn test_update_sends_only_changed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/starwars/films/abc"))
        .and(body_json(json!({"director": "Irvin Kershner"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(film_json("abc", 5)))
        .expect(1)
        .mount(&server)
        .await;

    let (session, _) = signed_in("tok");
    let client = ApiClient::new(server.uri(), session);

    let changes = UpdateFilm {
        director: Some("Irvin Kershner".to_string()),
        ..Default::default()
    };
    client.update_film("abc", &changes).await.unwrap();
}

#[tokio::test]
async fn test_delete_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/starwars/films/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (session, _) = signed_in("tok");
    let client = ApiClient::new(server.uri(), session);
    client.delete_film("abc").await.unwrap();
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/starwars/films"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let (session, _) = anonymous();
    let client = ApiClient::new(server.uri(), session);

    let err = client.list_films().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let (session, _) = anonymous();
    let client = ApiClient::new("http://127.0.0.1:9", session.clone());

    let err = client.list_films().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message("Could not load films"), "Could not load films");
}
