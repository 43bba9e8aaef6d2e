//! # Application Layer
//!
//! The seams the chat widget talks through and the use cases that drive a
//! submission from the input field to a rendered reply.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
