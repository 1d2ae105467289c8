//! Front-end independent key vocabulary.

use serde::{Deserialize, Serialize};

/// One logical key press delivered to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Up,
    Down,
    Enter,
    Escape,
    KillToStart,
    KillToEnd,
    KillWordBack,
}
