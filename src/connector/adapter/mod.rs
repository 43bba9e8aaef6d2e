mod http_chat_transport;
mod in_memory_chat_surface;
mod message_renderer;
mod mock_chat_transport;
mod terminal_chat_surface;

pub use http_chat_transport::*;
pub use in_memory_chat_surface::*;
pub use message_renderer::*;
pub use mock_chat_transport::*;
pub use terminal_chat_surface::*;
