//! Guide completion modal
//!
//! Shown while the wizard's completion gate is open. Closed only by an
//! explicit acknowledgement; there is no auto-dismiss.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::locale::Locale;
use crate::tui::layout::centered_rect_fixed;
use crate::wizard::GuideSession;

/// Render the completion modal
pub fn render(frame: &mut Frame, session: &GuideSession) {
    let area = centered_rect_fixed(54, 9, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let (title, message, hint) = match session.locale() {
        Locale::En => (
            " Guide Complete! ",
            "You have finished every step of this guide. Well done!",
            "[Enter] Continue",
        ),
        Locale::Tl => (
            " Natapos ang Gabay! ",
            "Natapos mo na ang bawat hakbang ng gabay na ito. Magaling!",
            "[Enter] Magpatuloy",
        ),
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            session.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::Yellow))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
