//! Screen layout management

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the column holding the move buttons
const OPERATION_WIDTH: u16 = 7;

/// Screen areas of the demo application
pub struct AppLayout {
    pub content: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Control
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            content: chunks[0],
            status: chunks[1],
        }
    }
}

/// Left pane, operation column, right pane
pub struct TransferLayout {
    pub left: Rect,
    pub operation: Rect,
    pub right: Rect,
}

impl TransferLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(OPERATION_WIDTH),
                Constraint::Fill(1),
            ])
            .split(area);

        Self {
            left: chunks[0],
            operation: chunks[1],
            right: chunks[2],
        }
    }
}

/// Pane body with an optional search bar on top
pub struct FilterLayout {
    pub filter: Rect,
    pub content: Rect,
}

impl FilterLayout {
    pub fn new(area: Rect, show_filter: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(if show_filter { 3 } else { 0 }), // Search bar
                Constraint::Min(1),                                   // Rows
            ])
            .split(area);

        Self {
            filter: chunks[0],
            content: chunks[1],
        }
    }
}

/// Two buttons stacked in the middle of the operation column
pub struct OperationLayout {
    pub right_button: Rect,
    pub left_button: Rect,
}

impl OperationLayout {
    pub fn new(area: Rect) -> Self {
        let top = area.y + area.height.saturating_sub(3) / 2;
        let bottom = area.y + area.height;
        let right_button = Rect::new(area.x, top.min(bottom), area.width, area.height.min(1));
        let left_y = (top + 2).min(bottom.saturating_sub(1));
        let left_button = Rect::new(area.x, left_y.max(area.y), area.width, area.height.min(1));

        Self {
            right_button,
            left_button,
        }
    }
}

/// Dialog/popup centered layout
pub struct DialogLayout {
    pub dialog: Rect,
}

impl DialogLayout {
    /// Create centered dialog with fixed dimensions
    pub fn centered(area: Rect, width: u16, height: u16) -> Self {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Self {
            dialog: Rect::new(x, y, width.min(area.width), height.min(area.height)),
        }
    }
}
