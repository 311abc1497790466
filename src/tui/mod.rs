//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, drives the refresh
//! cycle and paints the canvas.
//!
//! ## Refresh Cycle
//!
//! One logical task on a current-thread runtime:
//!
//! ```text
//! tick → fetch (errors become the error line) → format → draw → wait for next tick
//! ```
//!
//! The wait is a `tokio::time::interval` of `poll_minutes`. While waiting
//! the loop also listens for quit keys and SIGINT; nothing else causes a
//! redraw between ticks.

mod canvas;
mod component;
mod components;
mod event;
mod theme;
pub mod ui;

use log::{info, warn};
use std::future::Future;
use std::io::stdout;

use chrono::{DateTime, Utc};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{Event, EventStream};
use crossterm::execute;
use crossterm::terminal::{DisableLineWrap, EnableLineWrap};
use futures::{Stream, StreamExt};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::time::{Interval, MissedTickBehavior};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::feed::{FeedSource, GeoNetFeed};
use crate::tui::event::{TuiEvent, map_event};

pub use theme::Theme;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Long rows are clipped by the canvas; never let the terminal wrap them
        execute!(stdout(), DisableLineWrap, Hide)?;
        info!("Terminal modes enabled (line wrap off, cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), EnableLineWrap, Show);
    }
}

/// Runs one fetch cycle. Failures are recorded on `app`, never returned.
pub async fn refresh_feed(app: &mut App, source: &dyn FeedSource, now: DateTime<Utc>) -> Effect {
    update(app, Action::CycleStarted(now));

    let action = match source.fetch(app.config.mmi_filter).await {
        Ok(quakes) => Action::FeedLoaded(quakes),
        Err(e) => {
            warn!("{} fetch failed: {}", source.name(), e);
            Action::FeedFailed(e.to_string())
        }
    };
    update(app, action)
}

pub async fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = GeoNetFeed::new(config.feed_url.clone(), Some(config.request_timeout))
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!(
        "Polling {} every {} min (MMI filter: {:?})",
        source.base_url(),
        config.poll_minutes,
        config.mmi_filter.threshold()
    );

    let mut ticker = tokio::time::interval(config.poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut app = App::new(config);
    let theme = Theme::default();

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_terminal_mode_guard) => {
            event_loop(
                &mut terminal,
                &mut app,
                &source,
                &theme,
                ticker,
                EventStream::new(),
                tokio::signal::ctrl_c(),
            )
            .await
        }
        Err(e) => Err(e),
    };
    ratatui::restore();
    result
}

/// Fetches and repaints on every `ticker` tick until a quit key arrives on
/// `events`, the stream ends, or `shutdown` resolves.
async fn event_loop<B, S, F>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: &dyn FeedSource,
    theme: &Theme,
    mut ticker: Interval,
    mut events: S,
    shutdown: F,
) -> std::io::Result<()>
where
    B: Backend,
    S: Stream<Item = std::io::Result<Event>> + Unpin,
    F: Future,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh_feed(app, source, Utc::now()).await;
                let now = Utc::now();
                terminal
                    .draw(|f| ui::draw_ui(f, &*app, theme, now))
                    .map_err(|e| std::io::Error::other(e.to_string()))?;
            }
            maybe_event = events.next() => {
                let action = match maybe_event {
                    Some(Ok(event)) => match map_event(&event) {
                        Some(TuiEvent::Quit) => Action::Quit,
                        // Resized canvas is repainted on the next tick
                        Some(TuiEvent::Resize) | None => continue,
                    },
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                        continue;
                    }
                    None => Action::Quit,
                };
                if update(app, action) == Effect::Quit {
                    break;
                }
            }
            _ = &mut shutdown => {
                info!("Interrupted");
                break;
            }
        }
    }

    info!("Shutting down");
    Ok(())
}
