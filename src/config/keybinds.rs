//! Keyboard shortcut definitions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::actions::ControlAction;
use crate::app::events::navigation_delta;

/// Keyboard shortcut configuration
#[derive(Debug, Clone)]
pub struct KeyBindings {
    // Global
    pub quit: KeyBind,
    pub help: KeyBind,

    // Focus
    pub switch_pane: KeyBind,
    pub switch_pane_back: KeyBind,

    // Check boxes
    pub toggle_check: KeyBind,
    pub check_all: KeyBind,

    // Tree branches
    pub expand: KeyBind,
    pub collapse: KeyBind,
    pub toggle_expand: KeyBind,

    // Search
    pub search: KeyBind,
    pub clear_search: KeyBind,

    // Operation buttons
    pub move_right: KeyBind,
    pub move_left: KeyBind,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            // Global
            quit: KeyBind::new(KeyCode::Char('q'), KeyModifiers::NONE),
            help: KeyBind::new(KeyCode::Char('?'), KeyModifiers::NONE),

            // Focus
            switch_pane: KeyBind::new(KeyCode::Tab, KeyModifiers::NONE),
            switch_pane_back: KeyBind::new(KeyCode::BackTab, KeyModifiers::SHIFT),

            // Check boxes
            toggle_check: KeyBind::new(KeyCode::Char(' '), KeyModifiers::NONE),
            check_all: KeyBind::new(KeyCode::Char('a'), KeyModifiers::NONE),

            // Tree branches
            expand: KeyBind::new(KeyCode::Right, KeyModifiers::NONE),
            collapse: KeyBind::new(KeyCode::Left, KeyModifiers::NONE),
            toggle_expand: KeyBind::new(KeyCode::Enter, KeyModifiers::NONE),

            // Search
            search: KeyBind::new(KeyCode::Char('/'), KeyModifiers::NONE),
            clear_search: KeyBind::new(KeyCode::Esc, KeyModifiers::NONE),

            // Operation buttons
            move_right: KeyBind::new(KeyCode::Char('>'), KeyModifiers::NONE),
            move_left: KeyBind::new(KeyCode::Char('<'), KeyModifiers::NONE),
        }
    }
}

impl KeyBindings {
    /// Map a key press to a control action
    pub fn action(&self, key: &KeyEvent) -> Option<ControlAction> {
        let (code, modifiers) = (key.code, key.modifiers);

        if (code == KeyCode::Char('c') && modifiers == KeyModifiers::CONTROL)
            || self.quit.matches(code, modifiers)
        {
            return Some(ControlAction::Quit);
        }

        let bound = [
            (&self.help, ControlAction::Help),
            (&self.switch_pane, ControlAction::SwitchPane),
            (&self.switch_pane_back, ControlAction::SwitchPane),
            (&self.toggle_check, ControlAction::ToggleCheck),
            (&self.check_all, ControlAction::CheckAll),
            (&self.expand, ControlAction::Expand),
            (&self.collapse, ControlAction::Collapse),
            (&self.toggle_expand, ControlAction::ToggleExpand),
            (&self.search, ControlAction::Search),
            (&self.clear_search, ControlAction::ClearSearch),
            (&self.move_right, ControlAction::MoveRight),
            (&self.move_left, ControlAction::MoveLeft),
        ];
        if let Some((_, action)) = bound
            .into_iter()
            .find(|(bind, _)| bind.matches(code, modifiers))
        {
            return Some(action);
        }

        navigation_delta(key).map(ControlAction::Navigate)
    }
}

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Shift is ignored for characters; terminals disagree on reporting it
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.code != code {
            return false;
        }
        match code {
            KeyCode::Char(_) => {
                modifiers.difference(KeyModifiers::SHIFT)
                    == self.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.modifiers == modifiers,
        }
    }
}
