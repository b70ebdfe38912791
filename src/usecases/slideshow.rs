//! Async task: emits slider ticks on a fixed interval.
//!
//! Runs concurrently with the page loop. Ticks travel through a bounded mpsc
//! channel (backpressure: the producer waits when the UI has not drained) and
//! are applied to the model as `Command::SliderTick`.

use crate::domain::Command;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// Slideshow worker. Produces one tick per interval until the channel closes.
pub struct SlideshowWorker {
    tx: mpsc::Sender<Command>,
    interval: Duration,
}

impl SlideshowWorker {
    pub fn new(tx: mpsc::Sender<Command>, interval: Duration) -> Self {
        Self { tx, interval }
    }

    /// Run the worker. Never stops on its own; ends only when the consumer is gone.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        // The first interval tick fires immediately; the slider advances only
        // after a full period has elapsed.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if self.tx.send(Command::SliderTick).await.is_err() {
                break;
            }
        }

        info!("slideshow worker finished (channel closed)");
    }
}
