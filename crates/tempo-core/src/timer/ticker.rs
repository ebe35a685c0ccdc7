//! One-second tick scheduling.
//!
//! The ticker owns at most one pending tick. Arming cancels whatever was
//! pending first, so a state-mutating command can never race a leftover tick
//! scheduled from the previous state: cancel (or re-arm) before mutating,
//! then re-arm only if the resulting state is running.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Schedules at most one pending tick at a time.
#[derive(Debug, Default)]
pub struct Ticker {
    pending: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Cancel the pending tick, then schedule exactly one new tick to be
    /// delivered on `tx` after one second.
    pub fn arm(&mut self, tx: mpsc::Sender<()>) {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(TICK_INTERVAL).await;
            // Receiver gone means the driver shut down; nothing to deliver.
            let _ = tx.send(()).await;
        }));
    }

    /// Abort the pending tick, if any. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn armed_tick_fires_after_one_second() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut ticker = Ticker::new();
        ticker.arm(tx);
        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(rx.recv().await, Some(()));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_tick_never_fires() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut ticker = Ticker::new();
        ticker.arm(tx);
        ticker.cancel();
        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_leaves_a_single_pending_tick() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut ticker = Ticker::new();
        ticker.arm(tx.clone());
        ticker.arm(tx);
        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(rx.recv().await, Some(()));
        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
