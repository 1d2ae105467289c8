//! Terminal row/column layout helpers for the suggestion screen.

use crate::tui::settings;
use crossterm::terminal;

/// Read terminal size as `(cols, rows)` or fall back to 80x24.
pub(crate) fn terminal_size() -> (usize, usize) {
    terminal::size()
        .ok()
        .map(|(cols, rows)| (cols as usize, rows as usize))
        .filter(|(cols, rows)| *cols > 0 && *rows > 0)
        .unwrap_or((settings::FALLBACK_COLUMNS, settings::FALLBACK_ROWS))
}

/// Clip to at most `max_width` chars.
pub(crate) fn clip_to_width(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Clip to `max_width` chars, marking the cut with `...`.
pub(crate) fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return clip_to_width(s, max_width);
    }
    format!("{}...", clip_to_width(s, max_width - 3))
}

/// Computed geometry of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameLayout {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
}

impl FrameLayout {
    pub(crate) fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Number of suggestion rows that fit between the input and the footer.
    pub(crate) fn visible_suggestions(&self, total: usize) -> usize {
        let first = settings::ROW_FIRST_SUGGESTION as usize;
        let available = self.rows.saturating_sub(first + 1);
        total.min(available)
    }

    /// Row of the key-help footer, if the screen is tall enough to have one.
    pub(crate) fn footer_row(&self) -> Option<u16> {
        let row = self.rows.checked_sub(1)?;
        (row > settings::ROW_FIRST_SUGGESTION as usize).then_some(row as u16)
    }

    /// Map a clicked screen row to a visible suggestion index.
    pub(crate) fn suggestion_index_at(&self, row: u16, total: usize) -> Option<usize> {
        let offset = row.checked_sub(settings::ROW_FIRST_SUGGESTION)? as usize;
        (offset < self.visible_suggestions(total)).then_some(offset)
    }

    /// Slice of the query shown on the input line and the caret column.
    ///
    /// The window scrolls horizontally so the caret is always on screen.
    /// `cursor` is a char index.
    pub(crate) fn input_window(&self, query: &str, cursor: usize) -> (String, u16) {
        let prompt_width = settings::PROMPT.chars().count();
        let width = self.cols.saturating_sub(prompt_width).max(1);
        let start = cursor.saturating_sub(width - 1);
        let visible: String = query.chars().skip(start).take(width).collect();
        let column = prompt_width + (cursor - start);
        (visible, column.min(u16::MAX as usize) as u16)
    }
}
