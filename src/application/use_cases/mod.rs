mod chat_widget;
mod submit_message;

pub use chat_widget::*;
pub use submit_message::*;
