use super::types::PostSummary;
use super::FeedProvider;
use crate::config::FeedConfig;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};

#[derive(Debug, Clone, PartialEq)]
pub enum FeedStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct LaneFeed {
    pub status: FeedStatus,
    pub posts: Vec<PostSummary>,
    pub fetched_at: Option<DateTime<Local>>,
}

impl LaneFeed {
    fn loading() -> Self {
        Self {
            status: FeedStatus::Loading,
            posts: Vec::new(),
            fetched_at: None,
        }
    }
}

/// Latest posts per source name. Lanes sharing a name share an entry.
#[derive(Debug, Clone, Default)]
pub struct FeedBoard {
    lanes: HashMap<String, LaneFeed>,
}

impl FeedBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source: &str) -> Option<&LaneFeed> {
        self.lanes.get(source)
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn post_count(&self, source: &str) -> usize {
        self.lanes.get(source).map_or(0, |f| f.posts.len())
    }

    /// Make the board track exactly `names`. Returns the names that were
    /// not tracked before, in first-seen order.
    pub fn track(&mut self, names: &[String]) -> Vec<String> {
        self.lanes.retain(|k, _| names.contains(k));
        let mut added = Vec::new();
        for name in names {
            if !self.lanes.contains_key(name) {
                self.lanes.insert(name.clone(), LaneFeed::loading());
                added.push(name.clone());
            }
        }
        added
    }

    pub fn sources(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lanes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Store a fetch result. A failed refresh keeps the previous posts.
    /// Results for sources that stopped being tracked are dropped.
    pub fn record(&mut self, source: &str, result: Result<Vec<PostSummary>>) {
        let Some(entry) = self.lanes.get_mut(source) else {
            return;
        };
        match result {
            Ok(posts) => {
                entry.posts = posts;
                entry.status = FeedStatus::Ready;
                entry.fetched_at = Some(Local::now());
            }
            Err(e) => {
                entry.status = FeedStatus::Failed(format!("{:#}", e));
            }
        }
    }
}

/// Commands the TUI sends to the poller.
#[derive(Debug, Clone)]
pub enum FeedCommand {
    /// Current lane names in display order, duplicates allowed.
    Track(Vec<String>),
    Refresh,
    Shutdown,
}

/// Background task that keeps the board fresh. Owns nothing the arena
/// owns; it only sees source names.
///
/// Fetches run on their own tasks so the command loop never waits on the
/// network: a `Track` for a new lane is served while a slow refresh cycle
/// is still in flight.
pub struct FeedPoller {
    provider: Arc<dyn FeedProvider>,
    refresh_interval: Duration,
    request_spacing: Duration,
}

impl FeedPoller {
    pub fn new(provider: Arc<dyn FeedProvider>, config: &FeedConfig) -> Self {
        Self {
            provider,
            refresh_interval: Duration::from_secs(config.refresh_interval_s.max(1)),
            request_spacing: Duration::from_millis(config.request_spacing_ms),
        }
    }

    /// Run until `Shutdown` or until the command channel closes. In-flight
    /// fetches are aborted on the way out.
    pub async fn run(
        self,
        mut cmd_rx: mpsc::UnboundedReceiver<FeedCommand>,
        board_tx: watch::Sender<FeedBoard>,
    ) {
        let board_tx = Arc::new(board_tx);
        let mut interval = tokio::time::interval(self.refresh_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // At most one full refresh cycle at a time; ticks and `Refresh`
        // presses that land while one is running are coalesced into it.
        let mut cycle: Option<JoinHandle<()>> = None;
        let mut new_sources: JoinSet<()> = JoinSet::new();

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.start_cycle(&mut cycle, &board_tx);
                }
                Some(_) = new_sources.join_next(), if !new_sources.is_empty() => {}
                cmd = cmd_rx.recv() => match cmd {
                    Some(FeedCommand::Track(names)) => {
                        let mut added = Vec::new();
                        board_tx.send_modify(|b| added = b.track(&names));
                        if !added.is_empty() {
                            tracing::debug!(?added, "tracking new sources");
                            new_sources.spawn(self.fetch_all(added, board_tx.clone()));
                        }
                    }
                    Some(FeedCommand::Refresh) => {
                        tracing::info!("manual refresh");
                        self.start_cycle(&mut cycle, &board_tx);
                    }
                    Some(FeedCommand::Shutdown) | None => {
                        tracing::debug!("feed poller stopping");
                        if let Some(handle) = cycle.take() {
                            handle.abort();
                        }
                        new_sources.abort_all();
                        return;
                    }
                },
            }
        }
    }

    fn start_cycle(
        &self,
        cycle: &mut Option<JoinHandle<()>>,
        board_tx: &Arc<watch::Sender<FeedBoard>>,
    ) {
        if cycle.as_ref().is_some_and(|h| !h.is_finished()) {
            tracing::debug!("refresh already in progress");
            return;
        }
        let sources = board_tx.borrow().sources();
        *cycle = Some(tokio::spawn(self.fetch_all(sources, board_tx.clone())));
    }

    fn fetch_all(
        &self,
        sources: Vec<String>,
        board_tx: Arc<watch::Sender<FeedBoard>>,
    ) -> impl Future<Output = ()> + Send + 'static {
        let provider = Arc::clone(&self.provider);
        let spacing = self.request_spacing;
        async move {
            for (i, source) in sources.iter().enumerate() {
                // Rate-limit: reddit throttles bursts of anonymous requests
                if i > 0 && !spacing.is_zero() {
                    tokio::time::sleep(spacing).await;
                }
                let result = provider.fetch_posts(source).await;
                match &result {
                    Ok(posts) => {
                        tracing::debug!(source = %source, count = posts.len(), "fetched posts")
                    }
                    Err(e) => tracing::warn!(source = %source, error = %e, "feed fetch failed"),
                }
                board_tx.send_modify(|b| b.record(source, result));
            }
        }
    }
}
