//! Fixture insert helpers for populating the test database.

pub mod galaxy;
pub mod user;
