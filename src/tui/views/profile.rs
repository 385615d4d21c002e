//! Profile view
//!
//! FAQ entries, contact-support links, and logout in one selectable list.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::content::faq;
use crate::locale::Locale;
use crate::profile::{ContactLink, CONTACT_LINKS};
use crate::tui::app::App;

/// What a profile row does when activated
pub enum ProfileRow {
    Faq(usize),
    Contact(&'static ContactLink),
    Logout,
}

/// Resolve a row index into its action
pub fn row_at(app: &App, index: usize) -> Option<ProfileRow> {
    let faq_count = faq::entries(app.active_locale()).len();
    if index < faq_count {
        return Some(ProfileRow::Faq(index));
    }
    if let Some(contact) = CONTACT_LINKS.get(index - faq_count) {
        return Some(ProfileRow::Contact(contact));
    }
    if index == faq_count + CONTACT_LINKS.len() {
        return Some(ProfileRow::Logout);
    }
    None
}

/// Render the profile screen: list on top, selected FAQ answer below
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let locale = app.active_locale();
    let entries = faq::entries(locale);

    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Min(6),
            ratatui::layout::Constraint::Length(6),
        ])
        .split(area);

    render_list(frame, app, chunks[0]);

    // The answer pane tracks the selected FAQ row.
    if let Some(ProfileRow::Faq(i)) = row_at(app, app.selected_profile_index) {
        render_answer(frame, entries[i].answer, locale, chunks[1]);
    } else {
        render_answer(frame, "", locale, chunks[1]);
    }
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let locale = app.active_locale();

    let title = match locale {
        Locale::En => " Profile ",
        Locale::Tl => " Profile ",
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

    let mut items: Vec<ListItem> = Vec::new();
    for entry in faq::entries(locale) {
        items.push(ListItem::new(Line::from(vec![
            Span::styled("? ", Style::default().fg(Color::Cyan)),
            Span::styled(entry.question, Style::default().fg(Color::White)),
        ])));
    }
    for link in CONTACT_LINKS {
        items.push(ListItem::new(Line::from(vec![
            Span::styled("@ ", Style::default().fg(Color::Yellow)),
            Span::styled(link.kind.label(locale), Style::default().fg(Color::White)),
        ])));
    }
    let logout = match locale {
        Locale::En => "Log out",
        Locale::Tl => "Mag-log out",
    };
    items.push(ListItem::new(Line::from(Span::styled(
        logout,
        Style::default().fg(Color::Red),
    ))));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_profile_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_answer(frame: &mut Frame, answer: &str, locale: Locale, area: Rect) {
    let title = match locale {
        Locale::En => " Answer ",
        Locale::Tl => " Sagot ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(answer)
        .block(block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::content::Catalog;

    #[test]
    fn test_row_mapping_covers_all_rows() {
        let catalog = Catalog::load().unwrap();
        let settings = Settings::default();
        let app = App::new(&catalog, &settings);

        let count = app.profile_row_count();
        assert!(matches!(row_at(&app, 0), Some(ProfileRow::Faq(0))));
        assert!(matches!(row_at(&app, count - 1), Some(ProfileRow::Logout)));
        assert!(row_at(&app, count).is_none());

        let faq_count = faq::entries(app.active_locale()).len();
        assert!(matches!(
            row_at(&app, faq_count),
            Some(ProfileRow::Contact(_))
        ));
    }
}
