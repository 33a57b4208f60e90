//! Integration tests: login, the admin gate, and movie CRUD over HTTP.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use jsonwebtoken::Algorithm;
use movies::auth::{AdminCredentials, TokenClaims, TokenService};
use movies::{create_app, AppState, MovieService};
use serde_json::{json, Value};
use tower::util::ServiceExt;

const SECRET: &str = "test-jwt-secret-min-32-chars!!";
const ADMIN_EMAIL: &str = "admin@gmail.com";
const ADMIN_PASSWORD: &str = "admin";

fn test_app() -> Router {
    create_app(AppState {
        movies: MovieService::seeded(),
        tokens: TokenService::new(SECRET, Algorithm::HS256),
        admin: AdminCredentials::new(ADMIN_EMAIL.to_string(), ADMIN_PASSWORD.to_string()),
    })
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        json_request("POST", "/login", json!({ "email": email, "password": password })),
    )
    .await
}

#[tokio::test]
async fn home_and_health() {
    let app = test_app();
    let res = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"<h1>Hello world!</h1>");

    let (status, json) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn login_issues_token_for_admin_only() {
    let app = test_app();

    let (status, json) = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::OK);
    let token = json["token"].as_str().expect("response should contain token");
    let claims = TokenService::new(SECRET, Algorithm::HS256).verify(token).unwrap();
    assert_eq!(claims.email, ADMIN_EMAIL);

    let (status, json) = login(&app, ADMIN_EMAIL, "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(json.get("token").is_none());

    let (status, _) = login(&app, "someone@gmail.com", ADMIN_PASSWORD).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn issued_token_does_not_carry_password() {
    let app = test_app();
    let (_, json) = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let token = json["token"].as_str().unwrap();
    assert!(!token.is_empty());
    // TokenClaims deserialization would still succeed with extra fields, so check the raw payload.
    let mut validation = jsonwebtoken::Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    let raw = jsonwebtoken::decode::<Value>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(SECRET.as_bytes()),
        &validation,
    )
    .unwrap();
    assert_eq!(raw.claims, json!({ "email": ADMIN_EMAIL }));
}

#[tokio::test]
async fn list_requires_admin_token() {
    let app = test_app();

    let (status, _) = send(&app, get("/movies")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get_with_token("/movies", "garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let forged = TokenService::new("another-secret", Algorithm::HS256)
        .issue(&TokenClaims {
            email: ADMIN_EMAIL.to_string(),
        })
        .unwrap();
    let (status, _) = send(&app, get_with_token("/movies", &forged)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, json) = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let token = json["token"].as_str().unwrap();
    let (status, json) = send(&app, get_with_token("/movies", token)).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Avatar", "Interstellar"]);
}

#[tokio::test]
async fn valid_token_for_other_email_is_forbidden() {
    let app = test_app();
    let token = TokenService::new(SECRET, Algorithm::HS256)
        .issue(&TokenClaims {
            email: "user@gmail.com".to_string(),
        })
        .unwrap();
    let (status, json) = send(&app, get_with_token("/movies", &token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Invalid credentials");
}

#[tokio::test]
async fn get_by_id() {
    let app = test_app();

    let (status, json) = send(&app, get("/movies/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "id": 2, "title": "Interstellar", "year": 2014, "category": "Sci-fi" })
    );

    let (status, _) = send(&app, get("/movies/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = send(&app, get("/movies/0")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["fields"].get("id").is_some());

    let (status, _) = send(&app, get("/movies/2001")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn filter_by_category() {
    let app = test_app();

    let (status, json) = send(&app, get("/movies/?category=Action")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([{ "id": 1, "title": "Avatar", "year": 2009, "category": "Action" }])
    );

    let (status, json) = send(&app, get("/movies/?category=Action&year=2010")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));

    let (status, json) = send(&app, get("/movies/?category=Sci")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["fields"].get("category").is_some());
}

#[tokio::test]
async fn create_update_delete_lifecycle() {
    let app = test_app();
    let alien = json!({ "id": 3, "title": "Alien", "year": 1979, "category": "Horror" });

    let (status, json) = send(&app, json_request("POST", "/movies", alien.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "The movie was registered");
    let (_, json) = send(&app, get("/movies/3")).await;
    assert_eq!(json, alien);

    let update = json!({ "id": 77, "title": "Aliens", "year": 1986, "category": "Action" });
    let (status, json) = send(&app, json_request("PUT", "/movies/3", update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "The movie was updated");
    let (_, json) = send(&app, get("/movies/3")).await;
    assert_eq!(
        json,
        json!({ "id": 3, "title": "Aliens", "year": 1986, "category": "Action" })
    );

    let (_, json) = send(&app, get("/movies/?category=Action")).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    let req = Request::builder()
        .method("DELETE")
        .uri("/movies/3")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "The movie was deleted");
    let (status, _) = send(&app, get("/movies/3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_movie_is_rejected_with_field_detail() {
    let app = test_app();
    let bad = json!({ "title": "Up", "year": 9999, "category": "Family" });
    let (status, json) = send(&app, json_request("POST", "/movies", bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["fields"].get("title").is_some());
    assert!(json["fields"].get("year").is_some());
    assert!(json["fields"].get("category").is_none());

    let (_, json) = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let token = json["token"].as_str().unwrap().to_string();
    let (_, json) = send(&app, get_with_token("/movies", &token)).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_and_delete_missing_are_not_found() {
    let app = test_app();
    let movie = json!({ "title": "Tenet", "year": 2020, "category": "Thriller" });
    let (status, _) = send(&app, json_request("PUT", "/movies/50", movie)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = Request::builder()
        .method("DELETE")
        .uri("/movies/50")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().is_some());
}

async fn assert_json_rejection(app: &Router, req: Request<Body>, needle: &str) {
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"), "{}", content_type);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    let message = json["error"].as_str().unwrap();
    assert!(message.contains(needle), "{}", message);
}

#[tokio::test]
async fn missing_category_query_is_json_error() {
    let app = test_app();
    assert_json_rejection(&app, get("/movies/"), "category").await;
}

#[tokio::test]
async fn non_integer_path_id_is_json_error() {
    let app = test_app();
    assert_json_rejection(&app, get("/movies/abc"), "abc").await;

    let req = Request::builder()
        .method("DELETE")
        .uri("/movies/abc")
        .body(Body::empty())
        .unwrap();
    assert_json_rejection(&app, req, "abc").await;
}

#[tokio::test]
async fn mistyped_or_missing_body_fields_are_json_errors() {
    let app = test_app();
    let mistyped = json!({ "title": "Alien", "year": "abc", "category": "Horror" });
    assert_json_rejection(&app, json_request("POST", "/movies", mistyped), "year").await;

    let missing = json!({ "title": "Alien", "category": "Horror" });
    assert_json_rejection(&app, json_request("POST", "/movies", missing.clone()), "year").await;
    assert_json_rejection(&app, json_request("PUT", "/movies/1", missing), "year").await;

    let login_body = json!({ "email": ADMIN_EMAIL });
    assert_json_rejection(&app, json_request("POST", "/login", login_body), "password").await;

    let (_, json) = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let token = json["token"].as_str().unwrap().to_string();
    let (_, json) = send(&app, get_with_token("/movies", &token)).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}
