use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::widgets::Clear;

use crate::core::format::{FormatOptions, QuakeRow, format_quake};
use crate::core::state::App;
use crate::tui::canvas::canvas_area;
use crate::tui::component::Component;
use crate::tui::components::{ColumnTitles, ErrorLine, Header, QuakeTable};
use crate::tui::theme::Theme;

const NEVER_UPDATED: &str = "--:--:--";

/// Repaints the whole canvas for the current cycle.
///
/// `now` is the reference for the "time ago" column.
pub fn draw_ui(frame: &mut Frame, app: &App, theme: &Theme, now: DateTime<Utc>) {
    let config = &app.config;
    let layout = &config.layout;
    let canvas = canvas_area(layout, frame.area());

    frame.render_widget(Clear, canvas);

    ErrorLine {
        message: app.error.as_deref(),
        layout,
        theme,
    }
    .render(frame, canvas);

    let last_update = app
        .last_update
        .map(|t| t.with_timezone(&config.timezone).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| NEVER_UPDATED.to_string());

    Header {
        last_update,
        custom_interval: config.custom_interval().then_some(config.poll_minutes),
        mmi_threshold: config.mmi_filter.threshold(),
        layout,
        theme,
    }
    .render(frame, canvas);

    ColumnTitles { layout, theme }.render(frame, canvas);

    let rows = visible_rows(app, now);
    QuakeTable {
        rows: &rows,
        layout,
        theme,
    }
    .render(frame, canvas);
}

/// Formats at most `config.rows` quakes, in feed order.
fn visible_rows(app: &App, now: DateTime<Utc>) -> Vec<QuakeRow> {
    let options = FormatOptions::from_config(&app.config);
    let limit = app.config.rows.min(app.config.layout.list_capacity());
    app.quakes
        .iter()
        .take(limit)
        .map(|quake| format_quake(quake, &options, now))
        .collect()
}
