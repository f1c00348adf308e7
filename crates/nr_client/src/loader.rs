use crate::pipeline::FetchPipeline;
use nr_core::{Feed, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use url::Url;

/// Where the current load cycle stands. `Delivered` and `Reset` are terminal
/// for the cycle; a new `start` opens the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Delivered,
    Reset,
}

struct Cycle {
    state: LoadState,
    cancelled: Option<Arc<AtomicBool>>,
}

/// Runs the pipeline off the caller's task and delivers each cycle's result
/// through a single-consumer channel.
///
/// One cycle is in flight at most; the result reaches the receiver exactly
/// once per cycle unless `reset` supersedes it first. The consumer drains
/// the receiver on whatever task owns the presentation side, which is what
/// keeps deliveries off the background context.
pub struct FeedLoader {
    pipeline: Arc<FetchPipeline>,
    tx: UnboundedSender<Result<Feed>>,
    cycle: Arc<Mutex<Cycle>>,
}

impl FeedLoader {
    pub fn new(pipeline: FetchPipeline) -> (Self, UnboundedReceiver<Result<Feed>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let loader = Self {
            pipeline: Arc::new(pipeline),
            tx,
            cycle: Arc::new(Mutex::new(Cycle {
                state: LoadState::Idle,
                cancelled: None,
            })),
        };
        (loader, rx)
    }

    pub fn state(&self) -> LoadState {
        self.cycle.lock().unwrap().state
    }

    /// Starts a load cycle for `url`. Returns `false` without scheduling
    /// anything when a cycle is already loading; a reload after completion
    /// or reset has to be requested explicitly with another `start`.
    pub fn start(&self, url: Option<Url>) -> bool {
        let cancelled = {
            let mut cycle = self.cycle.lock().unwrap();
            if cycle.state == LoadState::Loading {
                tracing::debug!("load already in flight, ignoring start");
                return false;
            }
            let flag = Arc::new(AtomicBool::new(false));
            cycle.state = LoadState::Loading;
            cycle.cancelled = Some(flag.clone());
            flag
        };

        let pipeline = self.pipeline.clone();
        let tx = self.tx.clone();
        let shared = self.cycle.clone();
        tokio::spawn(async move {
            let result = pipeline.run(url.as_ref()).await;

            let mut cycle = shared.lock().unwrap();
            if cancelled.load(Ordering::SeqCst) {
                tracing::debug!("cycle was reset, discarding result");
                return;
            }
            cycle.state = LoadState::Delivered;
            // The receiver may have been dropped; no one left to notify then.
            let _ = tx.send(result);
        });
        true
    }

    /// Abandons the current cycle. An in-flight request finishes or times
    /// out on its own schedule, but its result is never delivered.
    pub fn reset(&self) {
        let mut cycle = self.cycle.lock().unwrap();
        if let Some(flag) = cycle.cancelled.take() {
            flag.store(true, Ordering::SeqCst);
        }
        cycle.state = LoadState::Reset;
    }
}
