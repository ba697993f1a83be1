//! HTTP API: configuration, routing, and request/response mapping for the
//! inventory item endpoints.

pub mod app;
pub mod config;

pub use config::ApiConfig;
