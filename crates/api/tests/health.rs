//! `/health` plus the cross-cutting HTTP behaviour every route shares:
//! JSON 404s, request ids and CORS.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use common::{body_json, get, send};
use sqlx::PgPool;

async fn preflight(pool: PgPool, origin: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/subscribers")
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    send(common::build_test_app(pool), request).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn healthy_database_reports_ok(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["dbHealthy"], true);
    assert!(json["dbConnections"].as_u64().unwrap() >= 1);
    assert!(json["dbIdleConnections"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn closed_pool_reports_degraded_but_still_200(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["dbHealthy"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unmatched_path_is_json_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/no/such/page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn generated_request_id_is_a_uuid(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap();
    assert_eq!(id.len(), 36);
    assert_eq!(id.matches('-').count(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_request_id_is_echoed(pool: PgPool) {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me-123")
        .body(Body::empty())
        .unwrap();

    let response = send(common::build_test_app(pool), request).await;
    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_from_site_origin_is_allowed(pool: PgPool) {
    let response = preflight(pool, "http://localhost:3000").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://localhost:3000"
    );
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("POST"), "allowed methods: {methods}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_from_foreign_origin_gets_no_allow_header(pool: PgPool) {
    let response = preflight(pool, "https://evil.example").await;
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
