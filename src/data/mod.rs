//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. Each
//! one is generic over [`sea_orm::ConnectionTrait`] so it works against both
//! the live connection pool and test connections.

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod specie;
pub mod user;
