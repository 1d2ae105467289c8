//! Frame renderer for the suggestion screen.
//!
//! Every frame is a full repaint: heading, hint, the query line, the
//! suggestion list with matches highlighted, and a key-help footer. The
//! caret is parked on the query line afterwards.

use crate::session::RenderState;
use crate::suggest::highlight_segments;
use crate::tui::layout::{clip_to_width, truncate_with_ellipsis, FrameLayout};
use crate::tui::settings;
use crossterm::cursor::MoveTo;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Static chrome plus color preference for a render surface.
#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    heading: String,
    hint: String,
}

impl Renderer {
    pub fn new(color: bool, heading: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            color,
            heading: heading.into(),
            hint: hint.into(),
        }
    }

    /// Paint one frame for `state` into `out` and flush.
    pub(crate) fn draw<W: Write>(
        &self,
        out: &mut W,
        state: &RenderState,
        layout: FrameLayout,
    ) -> io::Result<()> {
        out.queue(MoveTo(0, 0))?;
        out.queue(Clear(ClearType::All))?;

        let heading = truncate_with_ellipsis(&self.heading, layout.cols);
        let hint = truncate_with_ellipsis(&self.hint, layout.cols);
        out.queue(MoveTo(0, settings::ROW_HEADING))?;
        if self.color {
            out.queue(PrintStyledContent(
                heading.with(settings::COLOR_HEADING).bold(),
            ))?;
            out.queue(MoveTo(0, settings::ROW_HINT))?;
            out.queue(PrintStyledContent(hint.with(settings::COLOR_HINT)))?;
        } else {
            out.queue(Print(heading))?;
            out.queue(MoveTo(0, settings::ROW_HINT))?;
            out.queue(Print(hint))?;
        }

        let (visible_query, caret_col) = layout.input_window(&state.query, state.cursor);
        out.queue(MoveTo(0, settings::ROW_INPUT))?;
        if self.color {
            out.queue(PrintStyledContent(
                settings::PROMPT.with(settings::COLOR_PROMPT).bold(),
            ))?;
        } else {
            out.queue(Print(settings::PROMPT))?;
        }
        out.queue(Print(visible_query))?;

        let shown = layout.visible_suggestions(state.suggestions.len());
        let selected = state.selection.index();
        for (idx, suggestion) in state.suggestions.iter().take(shown).enumerate() {
            let row = settings::ROW_FIRST_SUGGESTION + idx as u16;
            out.queue(MoveTo(0, row))?;
            self.draw_suggestion(out, suggestion, &state.query, selected == Some(idx), layout.cols)?;
        }

        if let Some(row) = layout.footer_row() {
            let mut footer = truncate_with_ellipsis(settings::footer_text(self.color), layout.cols);
            let hidden = state.suggestions.len() - shown;
            if hidden > 0 {
                footer = truncate_with_ellipsis(&format!("(+{hidden} more) {footer}"), layout.cols);
            }
            out.queue(MoveTo(0, row))?;
            if self.color {
                out.queue(PrintStyledContent(footer.with(settings::COLOR_FOOTER)))?;
            } else {
                out.queue(Print(footer))?;
            }
        }

        out.queue(MoveTo(caret_col, settings::ROW_INPUT))?;
        out.flush()
    }

    fn draw_suggestion<W: Write>(
        &self,
        out: &mut W,
        suggestion: &str,
        query: &str,
        is_selected: bool,
        cols: usize,
    ) -> io::Result<()> {
        let marker = settings::suggestion_marker(is_selected, self.color);
        let lead = format!("{}{marker} ", settings::SUGGESTION_PREFIX);
        let mut budget = cols.saturating_sub(lead.chars().count());

        if !self.color {
            out.queue(Print(lead))?;
            out.queue(Print(clip_to_width(suggestion, budget)))?;
            return Ok(());
        }

        out.queue(Print(settings::SUGGESTION_PREFIX))?;
        let marker_color = if is_selected {
            settings::COLOR_SUGGESTION_MARKER_SELECTED
        } else {
            settings::COLOR_SUGGESTION_MARKER
        };
        out.queue(PrintStyledContent(marker.with(marker_color)))?;
        out.queue(Print(" "))?;

        for segment in highlight_segments(suggestion, query) {
            if budget == 0 {
                break;
            }
            let text = clip_to_width(segment.text, budget);
            budget -= text.chars().count();
            let styled = if segment.matched {
                text.with(settings::COLOR_SUGGESTION_MATCH).bold()
            } else {
                text.with(settings::COLOR_SUGGESTION_TEXT)
            };
            let styled = if is_selected {
                styled.on(settings::COLOR_SUGGESTION_SELECTED_BG)
            } else {
                styled
            };
            out.queue(PrintStyledContent(styled))?;
        }
        Ok(())
    }
}
