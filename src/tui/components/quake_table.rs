use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::format::{DisplayCell, QuakeRow};
use crate::core::layout::ScreenLayout;
use crate::tui::canvas::print_at;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// One canvas row per formatted quake, starting at `layout.list_top`.
pub struct QuakeTable<'a> {
    pub rows: &'a [QuakeRow],
    pub layout: &'a ScreenLayout,
    pub theme: &'a Theme,
}

impl QuakeTable<'_> {
    fn cell(&self, frame: &mut Frame, area: Rect, cell: &DisplayCell, x: u16, y: u16) {
        print_at(frame, area, &cell.text, x, y, self.theme.cell_style(cell));
    }
}

impl Component for QuakeTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let c = self.layout.columns;

        for (n, row) in self.rows.iter().enumerate() {
            let Some(y) = u16::try_from(n)
                .ok()
                .and_then(|n| self.layout.list_top.checked_add(n))
            else {
                break;
            };
            if y >= area.height {
                break;
            }

            self.cell(frame, area, &row.occurred, c.occurred, y);
            self.cell(frame, area, &row.ago, c.ago, y);
            self.cell(frame, area, &row.locality, c.locality, y);
            self.cell(frame, area, &row.magnitude, c.magnitude, y);
            self.cell(frame, area, &row.mmi, c.mmi, y);
            self.cell(frame, area, &row.depth, c.depth, y);
            self.cell(frame, area, &row.quality, c.quality, y);
        }
    }
}
