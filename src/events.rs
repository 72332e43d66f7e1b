use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    /// Advance the simulation by one generation
    Step,

    /// Draw the current generation again without advancing
    Redraw,

    /// Exit the application
    Quit,
}

/// Converts a crossterm event into a bitlife event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        // Some platforms report releases and repeats too
        CrossTermEvent::Key(KeyEvent { kind, .. }) if kind != KeyEventKind::Press => None,

        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            } => Some(Event::Quit),
            KeyEvent {
                code: KeyCode::Enter | KeyCode::Char(' ' | 'n'),
                ..
            } => Some(Event::Step),
            _ => None,
        },
        CrossTermEvent::Resize(..) => Some(Event::Redraw),
        _ => None,
    }
}
