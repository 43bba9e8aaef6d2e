//! # Connector Layer
//!
//! External integrations implementing the application seams:
//! - Transports (reqwest for the HTTP chat endpoint, a mock for offline use)
//! - Surfaces (in-memory HTML log, terminal)
//! - A container wiring configuration into concrete adapters

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
