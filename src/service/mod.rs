//! Service layer for business logic.
//!
//! Services coordinate repositories and enforce the rules that span more than
//! a single query: duplicate registration checks, credential verification and
//! token issuance, and favorite ownership checks.

pub mod auth;
pub mod favorite;
