use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Terminal input the loop cares about. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Resize,
}

/// Translate a crossterm event. Raw mode swallows SIGINT, so Ctrl+C
/// arrives here as a key.
pub fn map_event(event: &Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
