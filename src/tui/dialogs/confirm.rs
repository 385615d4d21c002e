//! Logout confirmation dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::locale::Locale;
use crate::tui::layout::centered_rect_fixed;

/// Render the logout confirmation
pub fn render(frame: &mut Frame, locale: Locale) {
    let area = centered_rect_fixed(50, 7, frame.area());

    frame.render_widget(Clear, area);

    let (title, message) = match locale {
        Locale::En => (" Confirm ", "Log out of AgriSense?"),
        Locale::Tl => (" Kumpirmahin ", "Mag-log out sa AgriSense?"),
    };
    let (yes, no) = match locale {
        Locale::En => (" Yes  ", " No"),
        Locale::Tl => (" Oo  ", " Hindi"),
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(yes),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(no),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
