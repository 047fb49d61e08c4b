pub mod input;
pub mod render;
pub mod theme;

use crate::arena::Arena;
use crate::config::Config;
use crate::feed::board::{FeedBoard, FeedCommand};
use anyhow::Result;
use crossterm::{
    event::{Event, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures_util::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// What a key press asks of the outside world after `Arena` has been
/// updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    Quit,
    Refresh,
    /// Lanes were added or removed; the poller needs the new name list.
    LanesChanged,
}

/// Run the TUI. Owns the `Arena`, reads feed snapshots from `board_rx`,
/// sends commands to the feed poller on `feed_tx`. Sends never wait, so a
/// slow fetch cannot stall drawing or key handling.
pub async fn run_tui(
    config: &Config,
    board_rx: watch::Receiver<FeedBoard>,
    feed_tx: mpsc::UnboundedSender<FeedCommand>,
) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = tui_loop(&mut terminal, config, board_rx, feed_tx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn tui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    config: &Config,
    mut board_rx: watch::Receiver<FeedBoard>,
    feed_tx: mpsc::UnboundedSender<FeedCommand>,
) -> Result<()> {
    let mut arena = Arena::new();
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(config.ui.tick_ms.max(50)));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut spinner_frame: u8 = 0;
    let mut feed_alive = true;

    loop {
        // Snapshot the board so the watch lock is not held while drawing
        let board = board_rx.borrow_and_update().clone();
        terminal.draw(|f| render::draw(f, &mut arena, &board, config, spinner_frame))?;

        tokio::select! {
            _ = tick.tick() => {
                spinner_frame = spinner_frame.wrapping_add(1);
            }
            changed = board_rx.changed(), if feed_alive => {
                if changed.is_err() {
                    tracing::warn!("feed poller stopped; lanes will no longer refresh");
                    feed_alive = false;
                }
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match input::handle_key(&mut arena, key, &board) {
                    Some(TuiCommand::Quit) => {
                        let _ = feed_tx.send(FeedCommand::Shutdown);
                        return Ok(());
                    }
                    Some(TuiCommand::Refresh) => {
                        let _ = feed_tx.send(FeedCommand::Refresh);
                    }
                    Some(TuiCommand::LanesChanged) => {
                        let _ = feed_tx.send(FeedCommand::Track(arena.lanes().names()));
                    }
                    None => {}
                },
                // Resize and mouse events just trigger a redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}
