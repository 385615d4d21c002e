//! Layout definitions for the TUI
//!
//! Defines the overall screen structure and per-screen regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout: header bar, main content, status bar
pub struct AppLayout {
    /// Header strip with app title and locale indicator
    pub header: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the guide screen
pub struct GuideLayout {
    /// Step tabs row
    pub tabs: Rect,
    /// Progress gauge
    pub progress: Rect,
    /// Step title and body
    pub content: Rect,
    /// Key hints
    pub footer: Rect,
}

impl GuideLayout {
    /// Calculate guide screen layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Step tabs
                Constraint::Length(3), // Progress gauge
                Constraint::Min(5),    // Content
                Constraint::Length(1), // Footer hints
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            progress: chunks[1],
            content: chunks[2],
            footer: chunks[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
