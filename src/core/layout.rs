//! # Screen Layout
//!
//! Fixed positions for every element on the canvas. The table is addressed
//! by absolute column offsets rather than flowing layout constraints, so
//! the columns line up identically on every refresh.

/// A fixed `(x, y)` position relative to the top-left of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
}

/// Column offsets of the quake table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub occurred: u16,
    pub ago: u16,
    pub locality: u16,
    pub magnitude: u16,
    pub mmi: u16,
    pub depth: u16,
    pub quality: u16,
}

/// Widths that numeric fields are right-justified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWidths {
    pub magnitude: usize,
    pub mmi: usize,
    pub depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: u16,
    pub height: u16,
    pub error: Anchor,
    pub header: Anchor,
    /// Offset from `header.x` of the poll interval badge.
    pub interval_badge: u16,
    /// Offset from `header.x` of the MMI filter badge.
    pub filter_badge: u16,
    /// First row of the quake list.
    pub list_top: u16,
    pub columns: Columns,
    pub widths: FieldWidths,
}

impl ScreenLayout {
    pub const DEFAULT: ScreenLayout = ScreenLayout {
        width: 200,
        height: 105,
        error: Anchor { x: 0, y: 0 },
        header: Anchor { x: 0, y: 1 },
        interval_badge: 22,
        filter_badge: 27,
        list_top: 5,
        columns: Columns {
            occurred: 0,
            ago: 27,
            locality: 44,
            magnitude: 85,
            mmi: 95,
            depth: 103,
            quality: 116,
        },
        widths: FieldWidths {
            magnitude: 9,
            mmi: 5,
            depth: 10,
        },
    };

    /// Row of the rule drawn under the header.
    pub fn upper_rule(&self) -> u16 {
        self.header.y + 1
    }

    pub fn titles_row(&self) -> u16 {
        self.header.y + 2
    }

    /// Row of the rule drawn under the column titles.
    pub fn lower_rule(&self) -> u16 {
        self.header.y + 3
    }

    /// How many quake rows fit between `list_top` and the bottom of the canvas.
    pub fn list_capacity(&self) -> usize {
        self.height.saturating_sub(self.list_top) as usize
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
