//! Terminal user-interface building blocks.
//!
//! Event decoding, layout math, and frame rendering are kept separate from
//! the session so the same state stream could drive another surface.

pub mod events;
pub(crate) mod layout;
pub mod renderer;
pub mod settings;
pub mod terminal;

pub use events::{pump_events, translate_event, UiInput};
pub use renderer::Renderer;
pub use terminal::{stdin_is_tty, TerminalGuard};

use crate::session::RenderState;
use std::io::{self, Write};

/// Screen geometry of the current terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    layout: layout::FrameLayout,
}

impl Screen {
    /// Measure the live terminal.
    pub fn measure() -> Self {
        let (cols, rows) = layout::terminal_size();
        Self::with_size(cols, rows)
    }

    pub fn with_size(cols: usize, rows: usize) -> Self {
        Self {
            layout: layout::FrameLayout::new(cols, rows),
        }
    }

    /// Suggestion index under a clicked row, if that row shows one.
    pub fn suggestion_at_row(&self, row: u16, state: &RenderState) -> Option<usize> {
        self.layout.suggestion_index_at(row, state.suggestions.len())
    }

    /// Paint `state` with `renderer`.
    pub fn draw<W: Write>(
        &self,
        renderer: &Renderer,
        out: &mut W,
        state: &RenderState,
    ) -> io::Result<()> {
        renderer.draw(out, state, self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::Selection;

    #[test]
    fn clicked_rows_resolve_against_current_suggestions() {
        let screen = Screen::with_size(80, 24);
        let state = RenderState {
            query: "how".to_string(),
            cursor: 3,
            suggestions: vec!["how is".to_string(), "how do".to_string()],
            selection: Selection::Unselected,
        };
        assert_eq!(
            screen.suggestion_at_row(settings::ROW_FIRST_SUGGESTION + 1, &state),
            Some(1)
        );
        assert_eq!(screen.suggestion_at_row(settings::ROW_INPUT, &state), None);
    }
}
