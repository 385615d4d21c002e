//! Animated progress gauge
//!
//! Renders the wizard's display percentage, which eases toward the derived
//! completion percentage while a step transition is pending.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::locale::Locale;

/// Localized gauge title
fn title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => " Progress ",
        Locale::Tl => " Progreso ",
    }
}

/// Render the progress gauge at an animated percentage in `[0, 100]`
pub fn render(frame: &mut Frame, area: Rect, percent: f64, locale: Locale) {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title(locale))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .label(format!("{:.0}%", percent))
        .ratio(ratio);

    frame.render_widget(gauge, area);
}
