mod chat_log;
mod exchange;
mod message;

pub use chat_log::*;
pub use exchange::*;
pub use message::*;
