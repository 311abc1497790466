//! # TUI Components
//!
//! Each component paints one region of the canvas at the fixed offsets
//! from [`ScreenLayout`](crate::core::layout::ScreenLayout). They are
//! stateless: all data arrives as props and is drawn in a single pass.
//!
//! ```text
//! row 0   ErrorLine     (only when the fetch failed)
//! row 1   Header        Last update / interval badge / MMI badge
//! row 2   ColumnTitles  ------------------------------------------
//! row 3                 Time occurred  Time ago  Locality  ...
//! row 4                 ------------------------------------------
//! row 5+  QuakeTable    one row per quake
//! ```

mod column_titles;
mod error_line;
mod header;
mod quake_table;

pub use column_titles::ColumnTitles;
pub use error_line::ErrorLine;
pub use header::Header;
pub use quake_table::QuakeTable;
