use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::layout::ScreenLayout;
use crate::tui::canvas::print_at;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// "Last update" line, plus badges for settings that are not at their defaults.
pub struct Header<'a> {
    /// Already formatted `HH:MM:SS`.
    pub last_update: String,
    /// Set only when the poll interval is not the default.
    pub custom_interval: Option<u64>,
    /// Set only when an MMI filter is active.
    pub mmi_threshold: Option<i8>,
    pub layout: &'a ScreenLayout,
    pub theme: &'a Theme,
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hx = self.layout.header.x;
        let hy = self.layout.header.y;

        print_at(
            frame,
            area,
            &format!("Last update: {}", self.last_update),
            hx,
            hy,
            self.theme.chrome,
        );

        if let Some(minutes) = self.custom_interval {
            print_at(
                frame,
                area,
                &format!("{minutes}m"),
                hx + self.layout.interval_badge,
                hy,
                self.theme.interval_badge,
            );
        }

        if let Some(mmi) = self.mmi_threshold {
            print_at(
                frame,
                area,
                &format!("MMI >= {mmi}"),
                hx + self.layout.filter_badge,
                hy,
                self.theme.filter_badge,
            );
        }
    }
}
