//! Tests for the route listing at the API root.

use axum::{http::StatusCode, response::IntoResponse};
use holocron::controller::sitemap::sitemap;

use crate::util::body_json;

/// Expect the root listing to include every public endpoint
#[tokio::test]
async fn sitemap_lists_registered_routes() {
    let resp = sitemap().await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let routes: Vec<&str> = body["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|route| route.as_str().unwrap())
        .collect();

    assert!(!routes.is_empty());
    assert!(routes.contains(&"POST /register"));
    assert!(routes.contains(&"POST /login"));
    assert!(routes.contains(&"GET /planet"));
    assert!(routes.contains(&"GET /favorite"));
    assert!(routes.contains(&"DELETE /favorite/{id}"));
}
