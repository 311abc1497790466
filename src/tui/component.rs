use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the canvas.
///
/// Components receive their data as props (struct fields) and paint
/// themselves at fixed offsets inside `area`, which is always the whole
/// canvas rather than a sub-region.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
