//! Fixed color palette for the race view.

use ratatui::style::Color;

#[inline]
pub fn bg_base() -> Color {
    Color::Rgb(0x0f, 0x37, 0x5f)
}

#[inline]
pub fn bar_low() -> Color {
    Color::Rgb(0x43, 0xee, 0xc6)
}

#[inline]
pub fn bar_high() -> Color {
    Color::Rgb(0x14, 0xc8, 0xd4)
}

#[inline]
pub fn bar_done() -> Color {
    Color::Rgb(0x23, 0x78, 0xf7)
}

#[inline]
pub fn border_default() -> Color {
    Color::Rgb(0x3b, 0x5f, 0x86)
}

#[inline]
pub fn border_focused() -> Color {
    Color::Rgb(0x83, 0xbf, 0xf6)
}

#[inline]
pub fn text_primary() -> Color {
    Color::Rgb(0xe6, 0xed, 0xf3)
}

#[inline]
pub fn text_muted() -> Color {
    Color::Rgb(0x8b, 0x9d, 0xb0)
}

#[inline]
pub fn accent_error() -> Color {
    Color::Rgb(0xf7, 0x6c, 0x6c)
}

#[inline]
pub fn accent_warning() -> Color {
    Color::Rgb(0xf7, 0xc9, 0x48)
}

/// Blend between two RGB colors. `t` is clamped to `0.0..=1.0`.
pub fn interpolate(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}
