//! User action handling

/// User-initiated actions on the control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    // Navigation
    Navigate(i32),
    SwitchPane,

    // Check boxes
    ToggleCheck,
    CheckAll,

    // Tree branches
    Expand,
    Collapse,
    ToggleExpand,

    // Search
    Search,
    ClearSearch,

    // Operation buttons
    MoveRight,
    MoveLeft,

    // General
    Help,
    Quit,
}

/// Result of processing a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Continue,
    Quit,
    ToggleHelp,
    /// The control announced a new target set
    Changed(Vec<String>),
}
