//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use ratatui::buffer::Buffer;

use crate::feed::{FeedError, FeedSource, MmiFilter, Quake, QuakeIndex};

/// A quake near Wellington, 5 minutes before 2021-03-04T10:20:30Z.
pub fn sample_quake() -> Quake {
    Quake {
        public_id: "2021p170321".to_string(),
        time: "2021-03-04T10:15:30.000000Z".to_string(),
        locality: "10 km north of Wellington".to_string(),
        magnitude: 4.26,
        mmi: Some(4.0),
        depth: 21.74,
        quality: "best".to_string(),
    }
}

/// Three quakes in the order a feed would list them.
pub fn sample_index() -> QuakeIndex {
    let mut seddon = sample_quake();
    seddon.public_id = "2021p170300".to_string();
    seddon.locality = "15 km east of Seddon".to_string();
    seddon.magnitude = 2.1;
    seddon.mmi = None;

    let mut taupo = sample_quake();
    taupo.public_id = "2021p170290".to_string();
    taupo.time = "2021-03-04T09:02:11.512Z".to_string();
    taupo.locality = "20 km west of Taupo".to_string();
    taupo.magnitude = 3.7;
    taupo.depth = 148.0;
    taupo.quality = "deleted".to_string();

    vec![sample_quake(), seddon, taupo].into_iter().collect()
}

/// Concatenated cell symbols of one buffer row.
pub fn buffer_row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x: u16| buffer[(x, y)].symbol())
        .collect()
}

/// A feed that always answers with the same quakes.
pub struct StaticFeed {
    quakes: QuakeIndex,
    last_filter: Mutex<MmiFilter>,
}

impl StaticFeed {
    pub fn new(quakes: QuakeIndex) -> Self {
        Self {
            quakes,
            last_filter: Mutex::new(MmiFilter::default()),
        }
    }

    /// The filter passed to the most recent `fetch`.
    pub fn last_filter(&self) -> MmiFilter {
        *self.last_filter.lock().unwrap()
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, filter: MmiFilter) -> Result<QuakeIndex, FeedError> {
        *self.last_filter.lock().unwrap() = filter;
        Ok(self.quakes.clone())
    }
}

/// A feed that always fails with the same error.
pub struct FailingFeed {
    error: FeedError,
}

impl FailingFeed {
    pub fn new(error: FeedError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl FeedSource for FailingFeed {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self, _filter: MmiFilter) -> Result<QuakeIndex, FeedError> {
        Err(self.error.clone())
    }
}

/// A feed that plays back scripted results in order, then repeats the last.
pub struct ScriptedFeed {
    script: Mutex<VecDeque<Result<QuakeIndex, FeedError>>>,
    calls: Mutex<usize>,
}

impl ScriptedFeed {
    pub fn new(script: Vec<Result<QuakeIndex, FeedError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(0),
        }
    }

    /// How many times `fetch` has been called.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl FeedSource for ScriptedFeed {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self, _filter: MmiFilter) -> Result<QuakeIndex, FeedError> {
        *self.calls.lock().unwrap() += 1;
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script.front().cloned().unwrap()
        }
    }
}
