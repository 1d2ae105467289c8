//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, glyphs, colors, and
//! the row layout of a frame.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Screen row of the heading line.
pub const ROW_HEADING: u16 = 0;
/// Screen row of the hint line.
pub const ROW_HINT: u16 = 1;
/// Screen row of the query input line.
pub const ROW_INPUT: u16 = 3;
/// First screen row of the suggestion list.
pub const ROW_FIRST_SUGGESTION: u16 = 5;

pub const SUGGESTION_PREFIX: &str = "  ";
pub const FALLBACK_COLUMNS: usize = 80;
pub const FALLBACK_ROWS: usize = 24;

pub const EVENT_POLL_MS: u64 = 80;

// ---------------------------------------------------------------------------
// Prompt strings / glyphs
// ---------------------------------------------------------------------------

pub const PROMPT: &str = "> ";
pub const FOOTER_KEYS: &str = "↑/↓ select · enter accept · esc dismiss · ctrl-c quit";
pub const FOOTER_KEYS_PLAIN: &str = "up/down select, enter accept, esc dismiss, ctrl-c quit";

pub const SUGGESTION_SELECTED_COLOR: &str = "▶";
pub const SUGGESTION_UNSELECTED_COLOR: &str = "·";
pub const SUGGESTION_SELECTED_PLAIN: &str = ">";
pub const SUGGESTION_UNSELECTED_PLAIN: &str = "-";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_HEADING: Color = Color::Cyan;
pub const COLOR_HINT: Color = Color::DarkGrey;
pub const COLOR_PROMPT: Color = Color::White;
pub const COLOR_FOOTER: Color = Color::DarkGrey;

pub const COLOR_SUGGESTION_MARKER_SELECTED: Color = Color::DarkYellow;
pub const COLOR_SUGGESTION_MARKER: Color = Color::DarkGrey;
pub const COLOR_SUGGESTION_TEXT: Color = Color::Grey;
pub const COLOR_SUGGESTION_MATCH: Color = Color::Yellow;
pub const COLOR_SUGGESTION_SELECTED_BG: Color = Color::Rgb {
    r: 40,
    g: 44,
    b: 52,
};

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

pub fn suggestion_marker(is_selected: bool, color: bool) -> &'static str {
    match (is_selected, color) {
        (true, true) => SUGGESTION_SELECTED_COLOR,
        (false, true) => SUGGESTION_UNSELECTED_COLOR,
        (true, false) => SUGGESTION_SELECTED_PLAIN,
        (false, false) => SUGGESTION_UNSELECTED_PLAIN,
    }
}

pub fn footer_text(color: bool) -> &'static str {
    if color {
        FOOTER_KEYS
    } else {
        FOOTER_KEYS_PLAIN
    }
}
