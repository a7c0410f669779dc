//! Array size entry box.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::race::{RaceError, RaceSize};

use super::palette::{accent_error, border_focused, text_muted, text_primary};

/// Longest accepted input, enough for any usize
const MAX_DIGITS: usize = 20;

/// State for the size box
#[derive(Debug, Clone, Default)]
pub struct SizeInputState {
    value: String,
    error: Option<String>,
}

impl SizeInputState {
    pub fn new(initial: usize) -> Self {
        Self {
            value: initial.to_string(),
            error: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Append a digit. Anything else is ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.value.len() < MAX_DIGITS {
            self.value.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        self.value.pop();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Validate the current value.
    ///
    /// On failure the error is kept for display and the text is left as typed.
    pub fn submit(&mut self, max: usize) -> Result<RaceSize, RaceError> {
        let result = self
            .value
            .parse::<RaceSize>()
            .and_then(|size| RaceSize::bounded(size.get(), max));
        self.error = result.as_ref().err().map(ToString::to_string);
        result
    }
}

/// Renders a [`SizeInputState`]
pub struct SizeInput<'a> {
    state: &'a SizeInputState,
}

impl<'a> SizeInput<'a> {
    pub fn new(state: &'a SizeInputState) -> Self {
        Self { state }
    }
}

impl Widget for SizeInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.state.error.is_some() {
            accent_error()
        } else {
            border_focused()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Array size ", Style::default().fg(text_muted())));

        let mut spans = vec![Span::styled(
            self.state.value.clone(),
            Style::default()
                .fg(text_primary())
                .add_modifier(Modifier::BOLD),
        )];
        spans.push(Span::styled("▏", Style::default().fg(border_focused())));
        if let Some(error) = &self.state.error {
            spans.push(Span::styled(
                format!("  {error}"),
                Style::default().fg(accent_error()),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
