//! Bar chart for one lane's current snapshot.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::sort::SortAlgorithm;

use super::palette::{
    bar_done, bar_high, bar_low, bg_base, border_default, interpolate, text_muted, text_primary,
};

/// Partial block glyphs, indexed by eighths of a cell
const EIGHTHS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Chart widget for a single algorithm's array.
pub struct SortChart<'a> {
    algorithm: SortAlgorithm,
    values: &'a [f64],
    swaps: usize,
    remaining: usize,
}

impl<'a> SortChart<'a> {
    pub fn new(algorithm: SortAlgorithm, values: &'a [f64]) -> Self {
        Self {
            algorithm,
            values,
            swaps: 0,
            remaining: 0,
        }
    }

    /// Total swaps recorded for the current race
    pub fn swaps(mut self, swaps: usize) -> Self {
        self.swaps = swaps;
        self
    }

    /// Frames still to be played back
    pub fn remaining(mut self, remaining: usize) -> Self {
        self.remaining = remaining;
        self
    }

    fn title(&self) -> Line<'static> {
        let progress = if self.remaining > 0 {
            format!(" {} left ", self.remaining)
        } else {
            " done ".to_string()
        };
        Line::from(vec![
            Span::styled(
                format!(" {} ", self.algorithm.display_name()),
                Style::default()
                    .fg(text_primary())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("· {} swaps ·", self.swaps),
                Style::default().fg(text_muted()),
            ),
            Span::styled(progress, Style::default().fg(text_muted())),
        ])
    }

    fn render_bars(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.values.is_empty() {
            return;
        }

        let max = self.values.iter().copied().fold(f64::MIN, f64::max);
        let width = area.width as usize;
        let len = self.values.len();

        for col in 0..width {
            // Columns map onto values; wide areas repeat a value across columns
            let idx = col * len / width;
            let value = self.values[idx];
            let ratio = if max > 0.0 {
                (value / max).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let color = if self.remaining == 0 {
                bar_done()
            } else {
                interpolate(bar_low(), bar_high(), ratio)
            };
            let style = Style::default().fg(color).bg(bg_base());

            let eighths = (ratio * area.height as f64 * 8.0).round() as usize;
            let x = area.x + col as u16;
            for row in 0..area.height as usize {
                let filled = eighths.saturating_sub(row * 8).min(8);
                let y = area.y + area.height - 1 - row as u16;
                buf[(x, y)].set_symbol(EIGHTHS[filled]).set_style(style);
            }
        }
    }
}

impl Widget for SortChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_default()))
            .style(Style::default().bg(bg_base()))
            .title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);
        self.render_bars(inner, buf);
    }
}
