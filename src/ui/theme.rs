//! Color theme definitions

use ratatui::style::{Color, Modifier, Style};

/// Control color theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub fg_bright: Color,

    // Accent colors
    pub accent: Color,

    // Check boxes
    pub checked: Color,
    pub partial: Color,

    // Search match inside a title
    pub matched: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,

    // Operation buttons
    pub button: Color,
    pub button_disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            fg_dim: Color::DarkGray,
            fg_bright: Color::White,

            accent: Color::Cyan,

            checked: Color::Green,
            partial: Color::Yellow,

            matched: Color::LightRed,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection: Color::Blue,

            button: Color::Cyan,
            button_disabled: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Dark theme variant
    pub fn dark() -> Self {
        Self::default()
    }

    /// Light theme variant
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            fg_dim: Color::DarkGray,
            fg_bright: Color::Black,
            accent: Color::Blue,
            checked: Color::Green,
            partial: Color::Magenta,
            matched: Color::Red,
            border: Color::Gray,
            border_focused: Color::Blue,
            selection: Color::LightBlue,
            button: Color::Blue,
            button_disabled: Color::Gray,
        }
    }

    /// Resolve a theme name; unknown names fall back to the default
    pub fn by_name(name: Option<&str>) -> Self {
        match name.map(|n| n.to_lowercase()).as_deref() {
            Some("light") => Self::light(),
            Some("dark") | Some("default") => Self::dark(),
            Some(other) => {
                tracing::debug!("Unknown theme '{}', using default", other);
                Self::default()
            }
            None => Self::default(),
        }
    }

    // Style helpers
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn selected(&self) -> Style {
        Style::default().bg(self.selection).fg(self.fg_bright)
    }

    pub fn checked(&self) -> Style {
        Style::default().fg(self.checked)
    }

    pub fn partial(&self) -> Style {
        Style::default().fg(self.partial)
    }

    pub fn matched(&self) -> Style {
        Style::default().fg(self.matched).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn button(&self, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.button_disabled)
        } else {
            Style::default().fg(self.button).add_modifier(Modifier::BOLD)
        }
    }
}
