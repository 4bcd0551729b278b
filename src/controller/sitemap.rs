use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::SitemapDto;

pub static SITEMAP_TAG: &str = "sitemap";

/// Routes listed at the API root, kept in registration order.
pub static ROUTES: &[&str] = &[
    "GET /",
    "POST /register",
    "POST /login",
    "GET /user",
    "POST /user",
    "GET /user/{id}/favorites",
    "POST /user/{id}/favorites",
    "GET /favorite",
    "POST /favorite",
    "DELETE /favorite/{id}",
    "GET /planet",
    "GET /planet/{id}",
    "GET /character",
    "GET /character/{id}",
    "GET /specie",
    "GET /specie/{id}",
    "GET /film",
    "GET /film/{id}",
];

/// List every registered route for endpoint discovery
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Route listing", body = SitemapDto),
    ),
)]
pub async fn sitemap() -> impl IntoResponse {
    let routes = ROUTES.iter().map(|route| route.to_string()).collect();

    (StatusCode::OK, Json(SitemapDto { routes })).into_response()
}
