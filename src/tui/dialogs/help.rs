//! Help overlay listing keybindings

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::locale::Locale;
use crate::tui::layout::centered_rect_fixed;

/// Render the help overlay
pub fn render(frame: &mut Frame, locale: Locale) {
    let area = centered_rect_fixed(56, 14, frame.area());

    frame.render_widget(Clear, area);

    let bindings: &[(&str, &str)] = match locale {
        Locale::En => &[
            ("j/k, ↑/↓", "Move selection"),
            ("Enter", "Open guide / complete step"),
            ("1-9, ←/→", "Jump between steps"),
            ("l", "Switch language"),
            ("p", "Profile"),
            ("Esc", "Back / close"),
            ("?", "This help"),
            ("q", "Quit"),
        ],
        Locale::Tl => &[
            ("j/k, ↑/↓", "Galawin ang pili"),
            ("Enter", "Buksan ang gabay / tapusin ang hakbang"),
            ("1-9, ←/→", "Lumipat sa mga hakbang"),
            ("l", "Palitan ang wika"),
            ("p", "Profile"),
            ("Esc", "Bumalik / isara"),
            ("?", "Ang tulong na ito"),
            ("q", "Umalis"),
        ],
    };

    let title = match locale {
        Locale::En => " Help ",
        Locale::Tl => " Tulong ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("")];
    for (key, action) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
            Span::styled(*action, Style::default().fg(Color::White)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
