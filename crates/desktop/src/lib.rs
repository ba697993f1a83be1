//! `stockroom-desktop`
//!
//! **Responsibility:** client for the inventory service.
//!
//! This crate provides:
//! - `InventoryApi`, the HTTP transport (`HttpInventoryApi`)
//! - `InventoryClient`, session-local state kept in step with the service
//! - the presentation layer and a terminal front end
//!
//! The service remains the authority; the client never edits its cached items locally.

pub mod api;
pub mod client;
pub mod config;
pub mod frontend;

pub use api::{ApiError, HttpInventoryApi, InventoryApi};
pub use client::{ClientState, InventoryClient};
pub use config::DesktopConfig;
