use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::application::{ChatSurface, SubmitEvent, SubmitEvents};
use crate::connector::adapter::render_plain;
use crate::domain::{ChatLog, DomainError, Message};

struct TerminalState {
    input: String,
    log: ChatLog,
    submit_tx: Option<mpsc::UnboundedSender<SubmitEvent>>,
    subscribed: bool,
}

/// A chat surface that prints the log to a terminal.
///
/// Each line read from the terminal is a submission; see
/// [`TerminalChatSurface::submit_line`]. Printing always appends at the
/// bottom, so the log is scrolled to the newest message by construction.
pub struct TerminalChatSurface {
    state: Mutex<TerminalState>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalChatSurface {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            state: Mutex::new(TerminalState {
                input: String::new(),
                log: ChatLog::new(),
                submit_tx: None,
                subscribed: false,
            }),
            out: Mutex::new(out),
        }
    }

    fn state(&self) -> MutexGuard<'_, TerminalState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn print(&self, message: &Message) -> Result<(), DomainError> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", render_plain(message))?;
        out.flush()?;
        Ok(())
    }

    /// Submits one line of terminal input.
    pub fn submit_line(&self, line: &str) {
        let mut state = self.state();
        state.input = line.to_string();

        if let Some(tx) = &state.submit_tx {
            if tx.send(SubmitEvent::new(line)).is_err() {
                debug!("Submit listener dropped; line ignored");
            }
        }
    }

    /// Signals end of input.
    pub fn close(&self) {
        self.state().submit_tx = None;
    }

    pub fn log(&self) -> ChatLog {
        self.state().log.clone()
    }
}

impl ChatSurface for TerminalChatSurface {
    fn subscribe_submit(&self) -> Result<SubmitEvents, DomainError> {
        let mut state = self.state();
        if state.subscribed {
            return Err(DomainError::AlreadySubscribed);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        state.submit_tx = Some(tx);
        state.subscribed = true;
        Ok(rx)
    }

    fn input_value(&self) -> String {
        self.state().input.clone()
    }

    fn clear_input(&self) {
        self.state().input.clear();
    }

    fn append_message(&self, message: &Message) {
        // Print under the state lock so screen order matches log order.
        let mut state = self.state();
        state.log.append(message.clone());

        if let Err(e) = self.print(message) {
            warn!("Failed to write message to terminal: {e}");
        }
    }
}

/// A cloneable in-memory writer, handy for capturing terminal output.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
