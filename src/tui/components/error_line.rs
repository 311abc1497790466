use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::layout::ScreenLayout;
use crate::tui::canvas::print_at;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// One line of bold red text describing this cycle's fetch failure.
pub struct ErrorLine<'a> {
    pub message: Option<&'a str>,
    pub layout: &'a ScreenLayout,
    pub theme: &'a Theme,
}

impl Component for ErrorLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(message) = self.message else {
            return;
        };
        // Keep it to the one reserved row
        let line = message.lines().next().unwrap_or_default();
        let anchor = self.layout.error;
        print_at(frame, area, line, anchor.x, anchor.y, self.theme.error);
    }
}
