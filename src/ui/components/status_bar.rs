//! Status line: race info on the left, key hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::race::RaceSummary;
use crate::ui::events::PlaybackMode;

use super::palette::{accent_error, accent_warning, bg_base, text_muted, text_primary};

const KEY_HINTS: &[(&str, &str)] = &[
    ("Enter", "run"),
    ("p", "pause"),
    (".", "step"),
    ("x", "cancel"),
    ("q", "quit"),
];

pub struct StatusBar<'a> {
    summary: Option<&'a RaceSummary>,
    mode: PlaybackMode,
    remaining: usize,
}

impl<'a> StatusBar<'a> {
    pub fn new(summary: Option<&'a RaceSummary>, mode: PlaybackMode, remaining: usize) -> Self {
        Self {
            summary,
            mode,
            remaining,
        }
    }

    fn race_spans(&self) -> Vec<Span<'static>> {
        let Some(summary) = self.summary else {
            return vec![Span::styled(
                " Enter a size and press Enter to start a race",
                Style::default().fg(text_muted()),
            )];
        };

        let mut spans = vec![Span::styled(
            format!(
                " race #{} · n={} · seed {} ",
                summary.race_id, summary.size, summary.seed
            ),
            Style::default().fg(text_primary()),
        )];

        if self.mode == PlaybackMode::Paused {
            spans.push(Span::styled(
                "PAUSED ",
                Style::default()
                    .fg(accent_warning())
                    .add_modifier(Modifier::BOLD),
            ));
        }

        if self.remaining > 0 {
            spans.push(Span::styled(
                format!("{} frames queued ", self.remaining),
                Style::default().fg(text_muted()),
            ));
        } else if let Some(winner) = summary.winner() {
            spans.push(Span::styled(
                format!("fewest swaps: {} ", winner.algorithm.display_name()),
                Style::default().fg(text_muted()),
            ));
        }

        if summary.results.iter().any(|r| !r.sorted) {
            spans.push(Span::styled(
                "unsorted lane! ",
                Style::default().fg(accent_error()),
            ));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = self.race_spans();

        let hints: Vec<Span<'static>> = KEY_HINTS
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(
                        format!(" {key}"),
                        Style::default()
                            .fg(text_primary())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" {label} "), Style::default().fg(text_muted())),
                ]
            })
            .collect();

        let used: usize = spans.iter().map(|s| s.width()).sum();
        let hints_width: usize = hints.iter().map(|s| s.width()).sum();
        let padding = (area.width as usize).saturating_sub(used + hints_width);
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.extend(hints);
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(bg_base()))
            .render(area, buf);
    }
}
