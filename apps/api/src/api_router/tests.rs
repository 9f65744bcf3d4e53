use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::build_router;
use crate::api_config::{ApiConfig, StorageBackend};
use crate::api_services::{HrRepositorySet, build_app_state, build_memory_session_layer};

const FRONTEND_URL: &str = "http://localhost:3000";
const LOGIN_URL: &str = "http://localhost:3000/login";
const FORBIDDEN_URL: &str = "http://localhost:3000/unauthorized";
const BOOTSTRAP_TOKEN: &str = "test-bootstrap-token";

fn test_config() -> ApiConfig {
    ApiConfig {
        migrate_only: false,
        storage: StorageBackend::Memory,
        frontend_url: FRONTEND_URL.to_owned(),
        login_url: LOGIN_URL.to_owned(),
        forbidden_url: FORBIDDEN_URL.to_owned(),
        bootstrap_token: BOOTSTRAP_TOKEN.to_owned(),
        api_host: "127.0.0.1".to_owned(),
        api_port: 0,
        cookie_secure: false,
    }
}

fn test_app() -> Router {
    let config = test_config();
    let app_state = build_app_state(HrRepositorySet::in_memory(), &config);
    let router = build_router(app_state);
    assert!(router.is_ok());

    router
        .unwrap_or_else(|_| unreachable!())
        .layer(build_memory_session_layer(false))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    let response = app.clone().oneshot(request).await;
    assert!(response.is_ok());
    response.unwrap_or_else(|_| unreachable!())
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder
        .body(Body::empty())
        .unwrap_or_else(|_| unreachable!())
}

fn post_json(uri: &str, cookie: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::ORIGIN, FRONTEND_URL)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| unreachable!())
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await;
    assert!(bytes.is_ok());
    serde_json::from_slice(&bytes.unwrap_or_default()).unwrap_or(Value::Null)
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Signs in through the bootstrap endpoint and returns the session cookie.
async fn sign_in(app: &Router, subject: &str, role: &str) -> String {
    let response = send(
        app,
        post_json(
            "/auth/bootstrap",
            None,
            &json!({ "token": BOOTSTRAP_TOKEN, "subject": subject, "role": role }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(ToOwned::to_owned)
        .unwrap_or_default()
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app();

    let response = send(&app, get("/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn anonymous_caller_is_redirected_to_login() {
    let app = test_app();

    let response = send(&app, get("/api/candidates", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some(LOGIN_URL));
}

#[tokio::test]
async fn hr_user_reaches_candidates() {
    let app = test_app();
    let cookie = sign_in(&app, "hr-1", "HR").await;
    assert!(!cookie.is_empty());

    let response = send(&app, get("/api/candidates", Some(cookie.as_str()))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn manager_is_redirected_away_from_candidates() {
    let app = test_app();
    let cookie = sign_in(&app, "manager-1", "MANAGER").await;

    let response = send(&app, get("/api/candidates", Some(cookie.as_str()))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some(FORBIDDEN_URL));
}

#[tokio::test]
async fn invalid_bootstrap_token_is_unauthorized() {
    let app = test_app();

    let response = send(
        &app,
        post_json(
            "/auth/bootstrap",
            None,
            &json!({ "token": "wrong", "subject": "hr-1", "role": "HR" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_role_is_rejected_at_bootstrap() {
    let app = test_app();

    let response = send(
        &app,
        post_json(
            "/auth/bootstrap",
            None,
            &json!({ "token": BOOTSTRAP_TOKEN, "subject": "x", "role": "INTERN" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn me_reports_the_session_user() {
    let app = test_app();
    let cookie = sign_in(&app, "ceo-1", "CEO").await;

    let response = send(&app, get("/auth/me", Some(cookie.as_str()))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["subject"], "ceo-1");
    assert_eq!(body["role"], "CEO");
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = test_app();
    let cookie = sign_in(&app, "hr-1", "HR").await;

    let response = send(&app, post_json("/auth/logout", Some(cookie.as_str()), &json!({}))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, get("/auth/me", Some(cookie.as_str()))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some(LOGIN_URL));
}

#[tokio::test]
async fn cross_origin_mutation_is_blocked() {
    let app = test_app();
    let cookie = sign_in(&app, "hr-1", "HR").await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/requests")
        .header(header::ORIGIN, "https://evil.example")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie.as_str())
        .body(Body::from(
            json!({ "kind": "leave", "title": "Leave" }).to_string(),
        ))
        .unwrap_or_else(|_| unreachable!());

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn approved_request_shows_on_dashboard() {
    let app = test_app();
    let employee = sign_in(&app, "hr-1", "HR").await;
    let manager = sign_in(&app, "manager-1", "MANAGER").await;

    let response = send(
        &app,
        post_json(
            "/api/requests",
            Some(employee.as_str()),
            &json!({ "kind": "training", "title": "Rust course" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["requester"], "hr-1");
    assert_eq!(created["status"], "pending");
    let request_id = created["id"].as_str().unwrap_or_default().to_owned();

    let approvals_uri = format!("/api/requests/{request_id}/approvals");

    let response = send(
        &app,
        post_json(
            approvals_uri.as_str(),
            Some(employee.as_str()),
            &json!({ "decision": "approved" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some(FORBIDDEN_URL));

    let response = send(
        &app,
        post_json(
            approvals_uri.as_str(),
            Some(manager.as_str()),
            &json!({ "decision": "approved" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["approver_role"], "MANAGER");

    let response = send(
        &app,
        post_json(
            approvals_uri.as_str(),
            Some(manager.as_str()),
            &json!({ "decision": "rejected", "comment": "changed my mind" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(&app, get("/api/dashboard/stats", Some(employee.as_str()))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let stats = json_body(response).await;
    assert_eq!(stats["total_requests"], 1);
    assert_eq!(stats["approved_requests"], 1);
    assert_eq!(stats["pending_requests"], 0);
}

#[tokio::test]
async fn non_reviewer_only_lists_own_requests() {
    let app = test_app();
    let first = sign_in(&app, "hr-1", "HR").await;
    let second = sign_in(&app, "hr-2", "HR").await;
    let ceo = sign_in(&app, "ceo-1", "CEO").await;

    for (cookie, title) in [(&first, "Laptop"), (&second, "Monitor")] {
        let response = send(
            &app,
            post_json(
                "/api/requests",
                Some(cookie.as_str()),
                &json!({ "kind": "equipment", "title": title }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, get("/api/requests", Some(first.as_str()))).await;
    let own = json_body(response).await;
    assert_eq!(own.as_array().map(Vec::len), Some(1));
    assert_eq!(own[0]["title"], "Laptop");

    let response = send(&app, get("/api/requests", Some(ceo.as_str()))).await;
    let all = json_body(response).await;
    assert_eq!(all.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn contract_lifecycle_for_finance() {
    let app = test_app();
    let finance = sign_in(&app, "finance-1", "FINANCE").await;

    let response = send(
        &app,
        post_json(
            "/api/contracts",
            Some(finance.as_str()),
            &json!({
                "employee_name": "Dana Scully",
                "position": "Analyst",
                "annual_salary_cents": 7_500_000
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let contract = json_body(response).await;
    assert_eq!(contract["status"], "draft");
    let contract_id = contract["id"].as_str().unwrap_or_default().to_owned();

    let sign_uri = format!("/api/contracts/{contract_id}/sign");
    let response = send(&app, post_json(sign_uri.as_str(), Some(finance.as_str()), &json!({}))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "signed");

    let response = send(&app, post_json(sign_uri.as_str(), Some(finance.as_str()), &json!({}))).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn malformed_identifier_is_a_bad_request() {
    let app = test_app();
    let cookie = sign_in(&app, "admin-1", "ADMIN").await;

    let response = send(&app, get("/api/candidates/not-a-uuid", Some(cookie.as_str()))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn inverted_cycle_window_is_a_bad_request() {
    let app = test_app();
    let cookie = sign_in(&app, "manager-1", "MANAGER").await;

    let response = send(
        &app,
        post_json(
            "/api/performance-cycles",
            Some(cookie.as_str()),
            &json!({ "name": "FY26", "starts_on": "2026-06-30", "ends_on": "2026-01-01" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

fn post_with_referer(uri: &str, cookie: &str, referer: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::REFERER, referer)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn referer_must_match_the_frontend_origin_exactly() {
    let app = test_app();
    let cookie = sign_in(&app, "hr-1", "HR").await;
    let payload = json!({ "kind": "leave", "title": "Leave" });

    let lookalike = post_with_referer(
        "/api/requests",
        cookie.as_str(),
        "http://localhost:3000.evil.example/attack",
        &payload,
    );
    let response = send(&app, lookalike).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let other_port = post_with_referer(
        "/api/requests",
        cookie.as_str(),
        "http://localhost:30001/requests",
        &payload,
    );
    let response = send(&app, other_port).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let same_origin = post_with_referer(
        "/api/requests",
        cookie.as_str(),
        "http://localhost:3000/requests/new",
        &payload,
    );
    let response = send(&app, same_origin).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn cycle_status_follows_the_calendar_on_read() {
    let app = test_app();
    let cookie = sign_in(&app, "hr-1", "HR").await;

    for (name, starts_on, ends_on) in [
        ("FY20", "2020-01-01", "2020-12-31"),
        ("FY99", "2099-01-01", "2099-12-31"),
    ] {
        let response = send(
            &app,
            post_json(
                "/api/performance-cycles",
                Some(cookie.as_str()),
                &json!({ "name": name, "starts_on": starts_on, "ends_on": ends_on }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, get("/api/performance-cycles", Some(cookie.as_str()))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cycles = json_body(response).await;
    assert_eq!(cycles[0]["name"], "FY99");
    assert_eq!(cycles[0]["status"], "planned");
    assert_eq!(cycles[1]["name"], "FY20");
    assert_eq!(cycles[1]["status"], "closed");
}
