use std::collections::HashMap;

use serde::Deserialize;

// ============================================================================
// GeoNet GeoJSON Types
// ============================================================================

/// Top-level document returned by the `/quake` endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Feature {
    pub properties: QuakeProperties,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct QuakeProperties {
    #[serde(rename = "publicID")]
    pub public_id: String,
    pub time: String,
    pub locality: String,
    pub magnitude: f64,
    /// Absent or `null` when no intensity was estimated.
    #[serde(default)]
    pub mmi: Option<f64>,
    pub depth: f64,
    pub quality: String,
}

// ============================================================================
// Domain Types
// ============================================================================

/// A single seismic event as shown in one row of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Quake {
    pub public_id: String,
    /// Raw feed timestamp, `YYYY-MM-DDTHH:MM:SS.ffffffZ` in UTC.
    pub time: String,
    pub locality: String,
    pub magnitude: f64,
    pub mmi: Option<f64>,
    /// Kilometres below the surface.
    pub depth: f64,
    pub quality: String,
}

impl From<QuakeProperties> for Quake {
    fn from(p: QuakeProperties) -> Self {
        Self {
            public_id: p.public_id,
            time: p.time,
            locality: p.locality,
            magnitude: p.magnitude,
            mmi: p.mmi,
            depth: p.depth,
            quality: p.quality,
        }
    }
}

/// Quakes keyed by public identifier, iterated in the order the feed listed them.
///
/// Inserting an identifier that is already present replaces the stored
/// record but keeps its position (last write wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuakeIndex {
    quakes: Vec<Quake>,
    positions: HashMap<String, usize>,
}

impl QuakeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, quake: Quake) {
        match self.positions.get(&quake.public_id) {
            Some(&pos) => self.quakes[pos] = quake,
            None => {
                self.positions
                    .insert(quake.public_id.clone(), self.quakes.len());
                self.quakes.push(quake);
            }
        }
    }

    pub fn get(&self, public_id: &str) -> Option<&Quake> {
        self.positions.get(public_id).map(|&pos| &self.quakes[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quake> {
        self.quakes.iter()
    }

    pub fn len(&self) -> usize {
        self.quakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quakes.is_empty()
    }
}

impl FromIterator<Quake> for QuakeIndex {
    fn from_iter<I: IntoIterator<Item = Quake>>(iter: I) -> Self {
        let mut index = QuakeIndex::new();
        for quake in iter {
            index.insert(quake);
        }
        index
    }
}

/// Indexes decoded features by public identifier.
pub fn index_features(features: Vec<Feature>) -> QuakeIndex {
    features
        .into_iter()
        .map(|feature| Quake::from(feature.properties))
        .collect()
}
