//! Status bar view
//!
//! Shows the active screen, locale, and transient status messages.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::locale::Locale;
use crate::tui::app::{ActiveScreen, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let locale = app.active_locale();

    let screen_name = match (app.active_screen, locale) {
        (ActiveScreen::Home, Locale::En) => "Home",
        (ActiveScreen::Home, Locale::Tl) => "Tahanan",
        (ActiveScreen::Guide, Locale::En) => "Guide",
        (ActiveScreen::Guide, Locale::Tl) => "Gabay",
        (ActiveScreen::Profile, _) => "Profile",
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", screen_name), Style::default().fg(Color::Black).bg(Color::Green)),
        Span::raw(" "),
        Span::styled(
            locale.native_name(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
    ];

    if let Some((message, _)) = &app.status_message {
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Cyan),
        ));
    } else {
        let hint = match locale {
            Locale::En => "[?] Help  [q] Quit",
            Locale::Tl => "[?] Tulong  [q] Umalis",
        };
        spans.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
