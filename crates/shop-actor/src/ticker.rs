//! # Periodic Ticker
//!
//! Drives [`ActorEntity::on_tick`](crate::ActorEntity::on_tick) from wall-clock
//! time. The ticker is the only clock in the system: entities never read time
//! themselves, which keeps them deterministic under test.
//!
//! The returned [`Ticker`] handle scopes the background task. Call
//! [`Ticker::stop`] for an orderly stop, or drop the handle and the task is
//! aborted; either way no tick is delivered after the owner is gone.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Handle to a running ticker task.
pub struct Ticker {
    stop: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl Ticker {
    /// Spawns a task that sends one tick to `client` every `period`.
    ///
    /// The first tick fires one full period after spawning. The task ends by
    /// itself if the actor shuts down.
    ///
    /// # Panics
    /// Panics if `period` is zero (see [`tokio::time::interval_at`]).
    pub fn spawn<T: ActorEntity>(client: ResourceClient<T>, period: Duration) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(?period, "Ticker started");

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => match client.tick().await {
                        Ok(changed) => debug!(changed, "Tick delivered"),
                        Err(e) if e.is_disconnected() => {
                            warn!(error = %e, "Actor gone, ticker exiting");
                            break;
                        }
                        Err(e) => warn!(error = %e, "Tick failed"),
                    },
                }
            }

            info!("Ticker stopped");
        });

        Self {
            stop: Some(stop_tx),
            handle: Some(handle),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stops the ticker and waits for its task to finish.
    ///
    /// Once this returns, the ticker's client clone has been dropped.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Ticker task failed");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
