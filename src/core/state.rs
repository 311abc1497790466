//! # Application State
//!
//! What the screen shows for the current cycle. Nothing here survives
//! into the next cycle except the configuration.
//!
//! ```text
//! App
//! ├── config: ResolvedConfig             // immutable run configuration
//! ├── quakes: QuakeIndex                 // this cycle's records, feed order
//! ├── error: Option<String>              // this cycle's fetch failure
//! └── last_update: Option<DateTime<Utc>> // when this cycle started
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{DateTime, Utc};

use crate::core::config::ResolvedConfig;
use crate::feed::QuakeIndex;

pub struct App {
    pub config: ResolvedConfig,
    pub quakes: QuakeIndex,
    pub error: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
}

impl App {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            quakes: QuakeIndex::new(),
            error: None,
            last_update: None,
        }
    }
}
