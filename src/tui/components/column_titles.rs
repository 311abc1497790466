use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::layout::ScreenLayout;
use crate::tui::canvas::print_at;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Column titles framed by two horizontal rules.
pub struct ColumnTitles<'a> {
    pub layout: &'a ScreenLayout,
    pub theme: &'a Theme,
}

impl ColumnTitles<'_> {
    pub const TITLES: [&'static str; 7] = [
        "Time occurred",
        "Time ago",
        "Locality",
        "Magnitude",
        "| MMI",
        "Depth (km)",
        "Quality",
    ];
}

impl Component for ColumnTitles<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = self.layout;
        let hx = layout.header.x;
        let rule = "-".repeat(layout.width as usize);
        let c = layout.columns;
        let offsets = [
            c.occurred,
            c.ago,
            c.locality,
            c.magnitude,
            c.mmi,
            c.depth,
            c.quality,
        ];

        print_at(frame, area, &rule, hx, layout.upper_rule(), self.theme.chrome);
        for (title, x) in Self::TITLES.iter().zip(offsets) {
            print_at(frame, area, title, x, layout.titles_row(), self.theme.titles);
        }
        print_at(frame, area, &rule, hx, layout.lower_rule(), self.theme.chrome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_row;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_titles_between_rules() {
        let mut terminal = Terminal::new(TestBackend::new(130, 5)).unwrap();
        let layout = ScreenLayout::DEFAULT;
        let theme = Theme::dark();
        terminal
            .draw(|f| ColumnTitles { layout: &layout, theme: &theme }.render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer_row(buffer, 2), "-".repeat(130));
        assert_eq!(buffer_row(buffer, 4), "-".repeat(130));

        let titles = buffer_row(buffer, 3);
        assert!(titles.starts_with("Time occurred"));
        assert_eq!(&titles[27..35], "Time ago");
        assert_eq!(&titles[44..52], "Locality");
        assert_eq!(&titles[85..94], "Magnitude");
        assert_eq!(&titles[95..100], "| MMI");
        assert_eq!(&titles[103..113], "Depth (km)");
        assert_eq!(&titles[116..123], "Quality");
    }
}
