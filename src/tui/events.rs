//! Crossterm event translation.

use crate::session::Key;
use crate::tui::settings;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Front-end level input after decoding one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiInput {
    /// Forward to the session unchanged.
    Key(Key),
    /// Enter; commits a highlighted suggestion, otherwise submits the query.
    Enter,
    /// Left click on a screen row.
    Click { row: u16 },
    /// Terminal geometry changed; repaint.
    Resize,
    /// Ctrl-C / Ctrl-D.
    Quit,
}

/// Decode one terminal event. Events with no meaning here yield `None`.
pub fn translate_event(event: &Event) -> Option<UiInput> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Resize(_, _) => Some(UiInput::Resize),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<UiInput> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => UiInput::Quit,
        KeyCode::Char('a') if ctrl => UiInput::Key(Key::Home),
        KeyCode::Char('e') if ctrl => UiInput::Key(Key::End),
        KeyCode::Char('b') if ctrl => UiInput::Key(Key::Left),
        KeyCode::Char('f') if ctrl => UiInput::Key(Key::Right),
        KeyCode::Char('p') if ctrl => UiInput::Key(Key::Up),
        KeyCode::Char('n') if ctrl => UiInput::Key(Key::Down),
        KeyCode::Char('u') if ctrl => UiInput::Key(Key::KillToStart),
        KeyCode::Char('k') if ctrl => UiInput::Key(Key::KillToEnd),
        KeyCode::Char('w') if ctrl => UiInput::Key(Key::KillWordBack),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(ch) => UiInput::Key(Key::Char(ch)),
        KeyCode::Enter => UiInput::Enter,
        KeyCode::Esc => UiInput::Key(Key::Escape),
        KeyCode::Up => UiInput::Key(Key::Up),
        KeyCode::Down => UiInput::Key(Key::Down),
        KeyCode::Left => UiInput::Key(Key::Left),
        KeyCode::Right => UiInput::Key(Key::Right),
        KeyCode::Home => UiInput::Key(Key::Home),
        KeyCode::End => UiInput::Key(Key::End),
        KeyCode::Backspace => UiInput::Key(Key::Backspace),
        KeyCode::Delete => UiInput::Key(Key::Delete),
        _ => return None,
    };
    Some(input)
}

fn translate_mouse(mouse: &MouseEvent) -> Option<UiInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(UiInput::Click { row: mouse.row }),
        _ => None,
    }
}

/// Blocking reader loop: decode terminal events and forward them to `tx`.
///
/// Runs on a blocking thread and returns once the receiver is dropped.
pub fn pump_events(tx: mpsc::UnboundedSender<UiInput>) -> io::Result<()> {
    while !tx.is_closed() {
        if !event::poll(Duration::from_millis(settings::EVENT_POLL_MS))? {
            continue;
        }
        let Some(input) = translate_event(&event::read()?) else {
            continue;
        };
        if tx.send(input).is_err() {
            break;
        }
    }
    Ok(())
}
