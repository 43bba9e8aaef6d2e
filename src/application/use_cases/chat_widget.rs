use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::application::{ChatSurface, ChatTransport, SubmitEvents, SubmitMessageUseCase};
use crate::domain::DomainError;

/// A chat widget mounted on a surface.
///
/// Mounting takes the surface's single submit subscription. [`ChatWidget::run`]
/// then turns every submission into an independent exchange: replies are
/// spawned as tasks, so a slow reply never holds up later submissions and
/// replies land in whatever order they resolve.
pub struct ChatWidget {
    events: SubmitEvents,
    submit: SubmitMessageUseCase,
}

impl ChatWidget {
    pub fn mount(
        surface: Arc<dyn ChatSurface>,
        transport: Arc<dyn ChatTransport>,
    ) -> Result<Self, DomainError> {
        let events = surface.subscribe_submit()?;
        debug!("Chat widget mounted");

        Ok(Self {
            events,
            submit: SubmitMessageUseCase::new(surface, transport),
        })
    }

    /// Handles submissions until the surface closes its event stream, then
    /// waits for the replies still in flight.
    pub async fn run(mut self) -> Result<(), DomainError> {
        let mut in_flight: JoinSet<()> = JoinSet::new();

        loop {
            tokio::select! {
                event = self.events.recv() => {
                    let Some(event) = event else { break };
                    if let Some(pending) = self.submit.submit(event.value()) {
                        in_flight.spawn(pending);
                    }
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = joined {
                        warn!("Reply task ended abnormally: {e}");
                    }
                }
            }
        }

        if !in_flight.is_empty() {
            info!("Waiting for {} pending replies", in_flight.len());
        }
        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                warn!("Reply task ended abnormally: {e}");
            }
        }

        debug!("Chat widget stopped");
        Ok(())
    }
}
