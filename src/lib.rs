//! Aerial Damage Assessment API
//!
//! This library exposes the core modules for testing and reuse.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod telemetry;
