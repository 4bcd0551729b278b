//! Request and response models shared across controllers.

pub mod api;
pub mod app;
pub mod auth;
pub mod favorite;
pub mod galaxy;
pub mod user;
