//! Per-timer tick tasks
//!
//! Every running timer gets one tokio task that wakes once per period and
//! posts the timer id back to the UI thread. Tasks never touch timer state;
//! the board drains the posted ids and does the recomputation itself.

use crate::types::TimerId;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Called after each tick is posted so the UI wakes up to drain it
pub type RepaintFn = Arc<dyn Fn() + Send + Sync>;

pub struct Ticker {
    handle: Handle,
    period: Duration,
    tx: mpsc::UnboundedSender<TimerId>,
    rx: mpsc::UnboundedReceiver<TimerId>,
    tasks: HashMap<TimerId, CancellationToken>,
    repaint: RepaintFn,
}

impl Ticker {
    pub fn new(handle: Handle, period: Duration, repaint: RepaintFn) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            period,
            tx,
            rx,
            tasks: HashMap::new(),
            repaint,
        }
    }

    /// Spawn the tick task for `id`. No-op if one is already running.
    pub fn start(&mut self, id: TimerId) {
        if self.tasks.contains_key(&id) {
            return;
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        let period = self.period;

        self.handle.spawn(async move {
            // First tick lands one period after creation
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(id).is_err() {
                            break;
                        }
                        repaint();
                    }
                }
            }
            trace!(id = %id, "Tick task stopped");
        });

        self.tasks.insert(id, token);
        debug!(id = %id, "Tick task started");
    }

    /// Cancel the tick task for `id`. Returns false if none was running.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.tasks.remove(&id) {
            Some(token) => {
                token.cancel();
                debug!(id = %id, "Tick task cancelled");
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        debug!(count = self.tasks.len(), "Cancelling all tick tasks");
        for (_, token) in self.tasks.drain() {
            token.cancel();
        }
    }

    #[cfg(test)]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.tasks.contains_key(&id)
    }

    pub fn scheduled_count(&self) -> usize {
        self.tasks.len()
    }

    /// Take every timer that ticked since the last drain, once each, in
    /// order of first arrival. Ticks that piled up while nobody drained
    /// collapse into one entry; ticks from cancelled tasks are dropped.
    pub fn drain(&mut self) -> Vec<TimerId> {
        let mut seen = HashSet::new();
        let mut due = Vec::new();
        while let Ok(id) = self.rx.try_recv() {
            if self.tasks.contains_key(&id) && seen.insert(id) {
                due.push(id);
            }
        }
        due
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
