//! Holocron server application core modules.
//!
//! This crate contains the full backend for the Holocron Star Wars archive API,
//! including HTTP routing, token authentication, database repositories, and the
//! error boundary that converts every domain failure into a JSON response.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
