use anyhow::Result;
use lane_arena::config::Config;
use lane_arena::feed::board::{FeedBoard, FeedCommand, FeedPoller};
use lane_arena::feed::reddit::RedditFeed;
use lane_arena::tui;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let log_file = std::fs::File::create("lane-arena.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lane_arena=info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = Config::load_or_default(Config::path_from_args(&args))?;
    tracing::info!(
        base_url = %config.feed.base_url,
        refresh_s = config.feed.refresh_interval_s,
        "starting lane-arena"
    );

    let provider = Arc::new(RedditFeed::new(&config.feed)?);
    let (board_tx, board_rx) = watch::channel(FeedBoard::new());
    let (feed_tx, feed_rx) = mpsc::unbounded_channel::<FeedCommand>();

    let poller = FeedPoller::new(provider, &config.feed);
    let poller_handle = tokio::spawn(poller.run(feed_rx, board_tx));

    // Blocks until quit
    let result = tui::run_tui(&config, board_rx, feed_tx).await;

    poller_handle.abort();
    tracing::debug!("shutting down");
    result
}
