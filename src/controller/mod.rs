//! HTTP controller endpoints for the Holocron web API.
//!
//! Controllers handle HTTP requests, validate inputs, interact with services
//! and repositories, and return appropriate HTTP responses. Protected
//! endpoints take the [`crate::model::auth::CurrentUser`] extractor, which
//! rejects missing or invalid tokens before the handler runs.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod sitemap;
pub mod specie;
pub mod user;
