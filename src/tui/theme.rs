//! Colour theme for the quake table.
//!
//! Maps the formatter's [`Tone`]s and [`Severity`] ladder onto terminal
//! colours. The lowest step is dark gray rather than black so it stays
//! readable on dark backgrounds.

use ratatui::style::{Color, Modifier, Style};

use crate::core::format::{DisplayCell, Severity, Tone};

#[derive(Debug, Clone)]
pub struct Theme {
    /// One colour per [`Severity`] step, least to most severe.
    pub palette: [Color; 8],
    pub muted: Color,
    pub highlight: Color,
    pub warning: Color,
    /// Error line style.
    pub error: Style,
    /// Badge shown when the poll interval is not the default.
    pub interval_badge: Style,
    /// Badge shown when an MMI filter is active.
    pub filter_badge: Style,
    /// Horizontal rules and the "Last update" label.
    pub chrome: Style,
    pub titles: Style,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            palette: [
                Color::DarkGray,
                Color::White,
                Color::Blue,
                Color::Cyan,
                Color::Green,
                Color::Yellow,
                Color::Red,
                Color::Magenta,
            ],
            muted: Color::DarkGray,
            highlight: Color::Yellow,
            warning: Color::Red,
            error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            interval_badge: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            filter_badge: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            chrome: Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            titles: Style::default(),
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        self.palette[severity.index()]
    }

    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Scale(severity) => Style::default().fg(self.severity_color(severity)),
            Tone::Plain => Style::default(),
            Tone::Muted => Style::default().fg(self.muted),
            Tone::Highlight => Style::default().fg(self.highlight),
            Tone::Warning => Style::default().fg(self.warning),
        }
    }

    pub fn cell_style(&self, cell: &DisplayCell) -> Style {
        let style = self.tone_style(cell.tone);
        if cell.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_ladder() {
        let theme = Theme::dark();
        assert_eq!(theme.severity_color(Severity::Negligible), Color::DarkGray);
        assert_eq!(theme.severity_color(Severity::Minor), Color::White);
        assert_eq!(theme.severity_color(Severity::Great), Color::Red);
        assert_eq!(theme.severity_color(Severity::Extreme), Color::Magenta);
    }

    #[test]
    fn test_cell_style_bold() {
        let theme = Theme::dark();
        let cell = DisplayCell {
            text: "deleted".to_string(),
            tone: Tone::Warning,
            bold: false,
        };
        let style = theme.cell_style(&cell);
        assert_eq!(style.fg, Some(Color::Red));
        assert!(!style.add_modifier.contains(Modifier::BOLD));

        let bold = DisplayCell { bold: true, ..cell };
        assert!(theme.cell_style(&bold).add_modifier.contains(Modifier::BOLD));
    }
}
