//! # Domain Layer
//!
//! Messages, the append-only chat log, and the shapes exchanged with the chat
//! endpoint. This layer is independent of HTTP clients and UI surfaces.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
