//! Home view
//!
//! Lists the available guides with their step counts.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::locale::Locale;
use crate::tui::app::App;

/// Render the guide list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let locale = app.active_locale();

    let title = match locale {
        Locale::En => " Guides ",
        Locale::Tl => " Mga Gabay ",
    };
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let step_word = match locale {
        Locale::En => "steps",
        Locale::Tl => "hakbang",
    };

    let items: Vec<ListItem> = app
        .catalog
        .guides()
        .iter()
        .map(|guide| {
            let line = Line::from(vec![
                Span::styled(
                    format!("{:<38}", guide.title(locale)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{} {}", guide.step_count(), step_word),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_guide_index));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the header strip
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let locale = app.active_locale();
    let tagline = match locale {
        Locale::En => "Learn better farming, step by step",
        Locale::Tl => "Matuto ng mas mahusay na pagsasaka, hakbang-hakbang",
    };

    let block = Block::default()
        .title(" AgriSense ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled(tagline, Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled(
            format!("[{}]", locale.native_name()),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
