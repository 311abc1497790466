//! # Actions
//!
//! Everything that happens during a refresh cycle becomes an `Action`.
//! A tick starts a cycle? That's `Action::CycleStarted(now)`.
//! The feed answers? That's `Action::FeedLoaded(index)`.
//!
//! `update()` applies an action to the state and reports what the loop
//! should do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::core::state::App;
use crate::feed::QuakeIndex;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new cycle begins; the previous cycle's rows and error are dropped.
    CycleStarted(DateTime<Utc>),
    FeedLoaded(QuakeIndex),
    /// The fetch failed; carries the message for the error line.
    FeedFailed(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::CycleStarted(now) => {
            debug!("Cycle started at {}", now);
            app.quakes = QuakeIndex::new();
            app.error = None;
            app.last_update = Some(now);
            Effect::None
        }
        Action::FeedLoaded(quakes) => {
            info!("Feed loaded: {} quakes", quakes.len());
            app.quakes = quakes;
            Effect::Redraw
        }
        Action::FeedFailed(message) => {
            info!("Feed failed: {}", message);
            app.quakes = QuakeIndex::new();
            app.error = Some(message);
            Effect::Redraw
        }
        Action::Quit => Effect::Quit,
    }
}
