//! Positional drawing on the fixed-size canvas.
//!
//! The canvas is the layout's `width × height` rectangle clipped to the
//! terminal. Text is placed at absolute `(x, y)` offsets inside it and cut
//! at the canvas edge; it never wraps onto the next row.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::core::layout::ScreenLayout;

/// The part of `frame_area` the canvas occupies.
pub fn canvas_area(layout: &ScreenLayout, frame_area: Rect) -> Rect {
    Rect::new(frame_area.x, frame_area.y, layout.width, layout.height).intersection(frame_area)
}

/// Draws `text` at `(x, y)` relative to `canvas`. Off-canvas text is dropped.
pub fn print_at(frame: &mut Frame, canvas: Rect, text: &str, x: u16, y: u16, style: Style) {
    if x >= canvas.width || y >= canvas.height {
        return;
    }
    let area = Rect::new(canvas.x + x, canvas.y + y, canvas.width - x, 1);
    frame.render_widget(Span::styled(text, style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::test_support::buffer_row;

    #[test]
    fn test_canvas_clipped_to_terminal() {
        let layout = ScreenLayout::DEFAULT;
        let area = canvas_area(&layout, Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(0, 0, 80, 24));

        let area = canvas_area(&layout, Rect::new(0, 0, 300, 200));
        assert_eq!(area, Rect::new(0, 0, 200, 105));
    }

    #[test]
    fn test_print_at_places_and_clips() {
        let backend = TestBackend::new(10, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let canvas = f.area();
                print_at(f, canvas, "abcdef", 6, 1, Style::default());
                print_at(f, canvas, "gone", 12, 0, Style::default());
                print_at(f, canvas, "gone", 0, 5, Style::default());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer_row(buffer, 1), "      abcd");
        assert_eq!(buffer_row(buffer, 0).trim(), "");
    }
}
