//! Guide view
//!
//! Step tabs, animated progress gauge, the current step's content, and
//! key hints. All state comes from the mounted guide session.

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::locale::Locale;
use crate::tui::layout::GuideLayout;
use crate::tui::widgets::progress;
use crate::wizard::GuideSession;

/// Render the guide screen
pub fn render(frame: &mut Frame, session: &GuideSession, area: Rect, now: Instant) {
    let layout = GuideLayout::new(area);

    render_tabs(frame, session, layout.tabs);
    progress::render(
        frame,
        layout.progress,
        session.wizard().display_percent(now),
        session.locale(),
    );
    render_content(frame, session, layout.content);
    render_footer(frame, session, layout.footer);
}

/// Render the step tabs; completed steps get a check mark
fn render_tabs(frame: &mut Frame, session: &GuideSession, area: Rect) {
    let wizard = session.wizard();

    let titles: Vec<Line> = session
        .steps()
        .iter()
        .map(|step| {
            let mark = if wizard.is_completed(step.index) {
                "✓"
            } else {
                " "
            };
            let style = if wizard.is_completed(step.index) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("{}{}", step.index + 1, mark), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(format!(" {} ", session.title()))
                .title_style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(wizard.current_step())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the current step's title and body
fn render_content(frame: &mut Frame, session: &GuideSession, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match session.current_content() {
        Ok(step) => {
            let step_label = match session.locale() {
                Locale::En => format!("Step {} of {}", step.definition.index + 1, session.steps().len()),
                Locale::Tl => format!(
                    "Hakbang {} ng {}",
                    step.definition.index + 1,
                    session.steps().len()
                ),
            };
            vec![
                Line::from(Span::styled(
                    step_label,
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    step.definition.title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(step.body, Style::default().fg(Color::White))),
            ]
        }
        // Content-authoring defect: show a visible fallback instead of
        // crashing the screen.
        Err(err) => {
            let notice = match session.locale() {
                Locale::En => "This step's content is unavailable.",
                Locale::Tl => "Hindi magamit ang nilalaman ng hakbang na ito.",
            };
            vec![
                Line::from(Span::styled(notice, Style::default().fg(Color::Red))),
                Line::from(Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Render the key hints line
fn render_footer(frame: &mut Frame, session: &GuideSession, area: Rect) {
    let transitioning = session.wizard().is_transitioning();

    let hints = match (session.locale(), transitioning) {
        (Locale::En, false) => "[Enter] Complete step  [←/→] Steps  [l] Language  [Esc] Back",
        (Locale::En, true) => "Saving progress...",
        (Locale::Tl, false) => "[Enter] Tapusin ang hakbang  [←/→] Mga hakbang  [l] Wika  [Esc] Bumalik",
        (Locale::Tl, true) => "Itinatala ang progreso...",
    };

    let style = if transitioning {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    frame.render_widget(Paragraph::new(hints).style(style), area);
}
