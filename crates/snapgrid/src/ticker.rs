//! One-second tick task driving the puzzle clock.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, interval_at};
use tracing::{debug, instrument};

/// Handle on a background task that emits one tick per second.
///
/// The owning screen drains the channel and forwards each tick to the
/// session clock. Dropping the handle aborts the task, so a superseded
/// screen can never leave a stale clock running.
#[derive(Debug)]
pub struct TickSource {
    handle: JoinHandle<()>,
}

impl TickSource {
    /// Spawns the tick task, sending one unit per second into `sender`.
    ///
    /// The first tick lands a full second after the call. The task ends on
    /// its own once the receiving side is gone.
    #[instrument(skip(sender))]
    pub fn start(sender: UnboundedSender<()>) -> Self {
        debug!("Starting tick source");
        let handle = tokio::spawn(async move {
            let period = Duration::from_secs(1);
            let mut timer = interval_at(Instant::now() + period, period);
            loop {
                timer.tick().await;
                if sender.send(()).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    /// Stops the tick task immediately.
    pub fn cancel(&self) {
        debug!("Cancelling tick source");
        self.handle.abort();
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test(start_paused = true)]
    async fn first_tick_lands_a_full_second_in() {
        let (tx, mut rx) = unbounded_channel();
        let _source = TickSource::start(tx);

        let started = Instant::now();
        rx.recv().await.expect("first tick");
        assert_eq!(started.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_arrive_once_per_second() {
        let (tx, mut rx) = unbounded_channel();
        let _source = TickSource::start(tx);

        let started = Instant::now();
        for _ in 0..3 {
            rx.recv().await.expect("tick");
        }
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_the_stream() {
        let (tx, mut rx) = unbounded_channel();
        let source = TickSource::start(tx);

        rx.recv().await.expect("tick before cancel");
        source.cancel();
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_source_stops_the_stream() {
        let (tx, mut rx) = unbounded_channel();
        let source = TickSource::start(tx);

        rx.recv().await.expect("tick before drop");
        drop(source);
        assert!(rx.recv().await.is_none());
    }
}
