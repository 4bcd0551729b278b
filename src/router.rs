//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Handlers registered with the same path are combined into a single route
/// entry, so `GET /user` and `POST /user` share one registration. The OpenAPI
/// specification is served at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes and middleware, ready
/// to be served once state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars archive API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration and login routes"),
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite bookmark routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character routes"),
        (name = controller::specie::SPECIE_TAG, description = "Specie routes"),
        (name = controller::film::FILM_TAG, description = "Film routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sitemap::sitemap))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::user::get_users, controller::user::create_user))
        .routes(routes!(
            controller::favorite::get_user_favorites,
            controller::favorite::add_user_favorite
        ))
        .routes(routes!(
            controller::favorite::get_favorites,
            controller::favorite::find_favorite
        ))
        .routes(routes!(controller::favorite::delete_favorite))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::specie::get_species))
        .routes(routes!(controller::specie::get_specie))
        .routes(routes!(controller::film::get_films))
        .routes(routes!(controller::film::get_film))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes.layer(CorsLayer::permissive())
}
