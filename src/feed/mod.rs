pub mod geonet;
pub mod source;
pub mod types;

pub use geonet::{DEFAULT_FEED_URL, GeoNetFeed};
pub use source::{FeedError, FeedSource, MmiFilter};
pub use types::{Feature, FeatureCollection, Quake, QuakeIndex, QuakeProperties, index_features};
