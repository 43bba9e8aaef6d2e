mod chat_surface;
mod chat_transport;

pub use chat_surface::*;
pub use chat_transport::*;
