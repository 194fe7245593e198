//! Terminal rendering and key handling of the transfer control

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::actions::{ActionResult, ControlAction};
use crate::config::keybinds::KeyBindings;
use crate::models::Title;
use crate::transfer::{count_label, CheckMark, TransferEvent, TreeTransfer};
use crate::ui::layout::{FilterLayout, OperationLayout, TransferLayout};
use crate::ui::theme::Theme;
use crate::ui::widgets::searchbar::SearchBar;
use crate::ui::widgets::tree::{ancestors, flatten, open_keys, toggle_open, PaneCursor};

/// Which pane receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Tree,
    List,
}

/// View state of the control: focus, cursors and search inputs
pub struct TransferView {
    pub focus: Pane,
    tree_cursor: PaneCursor,
    list_cursor: PaneCursor,
    tree_search: SearchBar,
    list_search: SearchBar,
    keybinds: KeyBindings,
}

impl Default for TransferView {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferView {
    pub fn new() -> Self {
        Self::with_keybindings(KeyBindings::default())
    }

    pub fn with_keybindings(keybinds: KeyBindings) -> Self {
        Self {
            focus: Pane::Tree,
            tree_cursor: PaneCursor::new(),
            list_cursor: PaneCursor::new(),
            tree_search: SearchBar::new(),
            list_search: SearchBar::new(),
            keybinds,
        }
    }

    /// Whether a search input is being edited
    pub fn editing(&self) -> bool {
        self.tree_search.active || self.list_search.active
    }

    pub fn tree_cursor(&self) -> usize {
        self.tree_cursor.selected
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor.selected
    }

    fn focused_search(&mut self) -> &mut SearchBar {
        match self.focus {
            Pane::Tree => &mut self.tree_search,
            Pane::List => &mut self.list_search,
        }
    }

    fn search_event(&self) -> TransferEvent {
        match self.focus {
            Pane::Tree => TransferEvent::TreeSearch(self.tree_search.query.clone()),
            Pane::List => TransferEvent::ListSearch(self.list_search.query.clone()),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, transfer: &mut TreeTransfer) -> ActionResult {
        if self.editing() {
            return self.handle_search_key(key, transfer);
        }

        let Some(action) = self.keybinds.action(&key) else {
            return ActionResult::Continue;
        };

        let event = match action {
            ControlAction::Quit => return ActionResult::Quit,
            ControlAction::Help => return ActionResult::ToggleHelp,
            ControlAction::SwitchPane => {
                self.focus = match self.focus {
                    Pane::Tree => Pane::List,
                    Pane::List => Pane::Tree,
                };
                None
            }
            ControlAction::Search => {
                if transfer.props().show_search {
                    self.focused_search().activate();
                }
                None
            }
            ControlAction::ClearSearch => {
                if self.focused_search().query.is_empty() {
                    None
                } else {
                    self.focused_search().clear();
                    Some(self.search_event())
                }
            }
            ControlAction::CheckAll => Some(transfer.state().header_toggle()),
            ControlAction::MoveRight => Some(TransferEvent::MoveRight),
            ControlAction::MoveLeft => Some(TransferEvent::MoveLeft),
            other => match self.focus {
                Pane::Tree => self.tree_action(other, transfer),
                Pane::List => self.list_action(other, transfer),
            },
        };

        match event.and_then(|event| transfer.dispatch(event)) {
            Some(keys) => ActionResult::Changed(keys),
            None => ActionResult::Continue,
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, transfer: &mut TreeTransfer) -> ActionResult {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return ActionResult::Quit;
        }

        let bar = self.focused_search();
        let before = bar.query.clone();
        match key.code {
            KeyCode::Esc | KeyCode::Enter => bar.deactivate(),
            KeyCode::Backspace => bar.backspace(),
            KeyCode::Delete => bar.delete(),
            KeyCode::Left => bar.move_left(),
            KeyCode::Right => bar.move_right(),
            KeyCode::Home => bar.move_home(),
            KeyCode::End => bar.move_end(),
            KeyCode::Char(c) => bar.insert(c),
            _ => {}
        }

        // Every keystroke regenerates; there is no debounce
        if bar.query != before {
            transfer.dispatch(self.search_event());
            self.tree_cursor.selected = 0;
            self.list_cursor.selected = 0;
        }
        ActionResult::Continue
    }

    fn tree_action(
        &mut self,
        action: ControlAction,
        transfer: &TreeTransfer,
    ) -> Option<TransferEvent> {
        let state = transfer.state();
        let open = open_keys(
            state.tree(),
            &state.tree_expanded_keys,
            state.tree_auto_expand_parent,
        );
        let rows = flatten(state.tree(), &open);

        if let ControlAction::Navigate(delta) = action {
            self.tree_cursor.move_by(delta, rows.len());
            return None;
        }

        self.tree_cursor.clamp(rows.len());
        let row = rows.get(self.tree_cursor.selected)?;

        match action {
            ControlAction::ToggleCheck => Some(state.tree_node_toggle(row.node)),
            ControlAction::Expand if !row.is_leaf() && !row.expanded => {
                Some(TransferEvent::TreeExpand(toggle_open(&open, &row.node.key)))
            }
            ControlAction::Collapse if row.expanded => {
                Some(TransferEvent::TreeExpand(toggle_open(&open, &row.node.key)))
            }
            ControlAction::Collapse => {
                // Jump to the enclosing branch
                let parent = ancestors(state.tree(), &row.node.key).pop()?;
                if let Some(idx) = rows.iter().position(|r| r.node.key == parent) {
                    self.tree_cursor.selected = idx;
                }
                None
            }
            ControlAction::ToggleExpand if !row.is_leaf() => {
                Some(TransferEvent::TreeExpand(toggle_open(&open, &row.node.key)))
            }
            _ => None,
        }
    }

    fn list_action(
        &mut self,
        action: ControlAction,
        transfer: &TreeTransfer,
    ) -> Option<TransferEvent> {
        let state = transfer.state();
        let rows = state.visible_list(transfer.props());

        match action {
            ControlAction::Navigate(delta) => {
                self.list_cursor.move_by(delta, rows.len());
                None
            }
            ControlAction::ToggleCheck => {
                self.list_cursor.clamp(rows.len());
                let entry = rows.get(self.list_cursor.selected)?;
                Some(state.list_row_toggle(&entry.key))
            }
            _ => None,
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        transfer: &TreeTransfer,
        theme: &Theme,
    ) {
        let layout = TransferLayout::new(area);
        self.render_tree(frame, layout.left, transfer, theme);
        self.render_operation(frame, layout.operation, transfer, theme);
        self.render_list(frame, layout.right, transfer, theme);
    }

    fn pane_block(
        &self,
        pane: Pane,
        title: String,
        count: Line<'static>,
        theme: &Theme,
    ) -> Block<'static> {
        let border = if self.focus == pane {
            theme.border_focused()
        } else {
            theme.border()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Line::from(Span::styled(title, theme.accent())))
            .title(count.alignment(Alignment::Right))
    }

    fn render_tree(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        transfer: &TreeTransfer,
        theme: &Theme,
    ) {
        let props = transfer.props();
        let state = transfer.state();

        let count = count_label(state.tree_checked_keys.len(), props.source_total);
        let block = self.pane_block(
            Pane::Tree,
            format!(" {} ", props.source_title),
            Line::from(Span::styled(format!(" {} ", count), theme.dim())),
            theme,
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body = FilterLayout::new(inner, props.show_search);
        if props.show_search {
            self.tree_search
                .render(frame, body.filter, theme.normal(), theme.border_focused());
        }

        let open = open_keys(
            state.tree(),
            &state.tree_expanded_keys,
            state.tree_auto_expand_parent,
        );
        let rows = flatten(state.tree(), &open);
        if rows.is_empty() {
            frame.render_widget(Paragraph::new("No data").style(theme.dim()), body.content);
            return;
        }

        self.tree_cursor.clamp(rows.len());
        self.tree_cursor.scroll_into_view(body.content.height as usize);
        let focused = self.focus == Pane::Tree;

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(self.tree_cursor.offset)
            .take(body.content.height as usize)
            .map(|(i, row)| {
                let arrow = if row.is_leaf() {
                    "  "
                } else if row.expanded {
                    "▾ "
                } else {
                    "▸ "
                };
                let mut spans = vec![
                    Span::raw("  ".repeat(row.depth)),
                    Span::styled(arrow, theme.dim()),
                    check_span(state.tree_check_mark(row.node), theme),
                    Span::raw(" "),
                ];
                spans.extend(title_spans(&row.node.title, theme));
                cursor_line(spans, focused && i == self.tree_cursor.selected, theme)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).style(theme.normal()), body.content);
    }

    fn render_list(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        transfer: &TreeTransfer,
        theme: &Theme,
    ) {
        let props = transfer.props();
        let state = transfer.state();
        let rows = state.visible_list(props);

        let count = Line::from(vec![
            Span::raw(" "),
            check_span(state.header_check(), theme),
            Span::styled(
                format!(" {} ", count_label(state.list_checked_keys.len(), rows.len())),
                theme.dim(),
            ),
        ]);
        let block = self.pane_block(Pane::List, format!(" {} ", props.target_title), count, theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body = FilterLayout::new(inner, props.show_search);
        if props.show_search {
            self.list_search
                .render(frame, body.filter, theme.normal(), theme.border_focused());
        }

        if rows.is_empty() {
            frame.render_widget(Paragraph::new("No data").style(theme.dim()), body.content);
            return;
        }

        self.list_cursor.clamp(rows.len());
        self.list_cursor.scroll_into_view(body.content.height as usize);
        let focused = self.focus == Pane::List;

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(self.list_cursor.offset)
            .take(body.content.height as usize)
            .map(|(i, entry)| {
                let mark = if state.list_checked_keys.contains(&entry.key) {
                    CheckMark::Checked
                } else {
                    CheckMark::Unchecked
                };
                let spans = vec![
                    check_span(mark, theme),
                    Span::raw(" "),
                    Span::raw(entry.title.clone()),
                ];
                cursor_line(spans, focused && i == self.list_cursor.selected, theme)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).style(theme.normal()), body.content);
    }

    fn render_operation(
        &self,
        frame: &mut Frame,
        area: Rect,
        transfer: &TreeTransfer,
        theme: &Theme,
    ) {
        let state = transfer.state();
        let buttons = OperationLayout::new(area);

        let right = Paragraph::new("[ > ]")
            .alignment(Alignment::Center)
            .style(theme.button(state.right_disabled()));
        let left = Paragraph::new("[ < ]")
            .alignment(Alignment::Center)
            .style(theme.button(state.left_disabled()));

        frame.render_widget(right, buttons.right_button);
        frame.render_widget(left, buttons.left_button);
    }
}

fn check_span(mark: CheckMark, theme: &Theme) -> Span<'static> {
    match mark {
        CheckMark::Checked => Span::styled("[x]", theme.checked()),
        CheckMark::Partial => Span::styled("[-]", theme.partial()),
        CheckMark::Unchecked => Span::styled("[ ]", theme.dim()),
    }
}

fn title_spans(title: &Title, theme: &Theme) -> Vec<Span<'static>> {
    match title {
        Title::Plain(text) => vec![Span::raw(text.clone())],
        Title::Highlighted {
            before,
            matched,
            after,
        } => vec![
            Span::raw(before.clone()),
            Span::styled(matched.clone(), theme.matched()),
            Span::raw(after.clone()),
        ],
    }
}

fn cursor_line(spans: Vec<Span<'static>>, selected: bool, theme: &Theme) -> Line<'static> {
    let style = if selected { theme.selected() } else { Style::default() };
    Line::from(spans).style(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceItem;
    use crate::transfer::TransferProps;
    use ratatui::{backend::TestBackend, Terminal};

    fn transfer(target: &[&str]) -> TreeTransfer {
        let props = TransferProps::new(
            vec![
                SourceItem::branch(
                    "fruit",
                    "Fruit",
                    vec![SourceItem::leaf("apple", "Apple"), SourceItem::leaf("pear", "Pear")],
                ),
                SourceItem::leaf("bread", "Bread"),
            ],
            target.iter().map(|s| s.to_string()).collect(),
        )
        .with_search(true)
        .with_source_total(3)
        .with_titles("Pantry", "Basket");
        TreeTransfer::new(props)
    }

    fn press(view: &mut TransferView, transfer: &mut TreeTransfer, code: KeyCode) -> ActionResult {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE), transfer)
    }

    fn screen(view: &mut TransferView, transfer: &TreeTransfer) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, transfer, &Theme::default());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn checking_a_leaf_and_moving_right() {
        let mut transfer = transfer(&[]);
        let mut view = TransferView::new();

        // Rows: Fruit, Bread (Fruit collapsed)
        press(&mut view, &mut transfer, KeyCode::Down);
        press(&mut view, &mut transfer, KeyCode::Char(' '));
        assert_eq!(transfer.state().tree_checked_keys, vec!["bread".to_string()]);

        let result = press(&mut view, &mut transfer, KeyCode::Char('>'));
        assert_eq!(result, ActionResult::Changed(vec!["bread".to_string()]));
    }

    #[test]
    fn checking_a_branch_checks_its_leaves() {
        let mut transfer = transfer(&[]);
        let mut view = TransferView::new();

        press(&mut view, &mut transfer, KeyCode::Char(' '));
        assert_eq!(
            transfer.state().tree_checked_keys,
            vec!["apple".to_string(), "pear".to_string()]
        );
    }

    #[test]
    fn expanding_switches_off_auto_expand() {
        let mut transfer = transfer(&["pear"]);
        let mut view = TransferView::new();
        assert!(transfer.state().tree_auto_expand_parent);

        // Fruit is open through auto-expand; collapsing it is a manual action
        press(&mut view, &mut transfer, KeyCode::Left);
        assert!(!transfer.state().tree_auto_expand_parent);
        assert!(!transfer.state().tree_expanded_keys.contains(&"fruit".to_string()));

        press(&mut view, &mut transfer, KeyCode::Right);
        assert!(transfer.state().tree_expanded_keys.contains(&"fruit".to_string()));
    }

    #[test]
    fn collapse_on_leaf_jumps_to_parent() {
        let mut transfer = transfer(&["pear"]);
        let mut view = TransferView::new();
        press(&mut view, &mut transfer, KeyCode::Down);
        press(&mut view, &mut transfer, KeyCode::Down);
        assert_eq!(view.tree_cursor(), 2);

        press(&mut view, &mut transfer, KeyCode::Left);
        assert_eq!(view.tree_cursor(), 0);
        assert!(transfer.state().tree_auto_expand_parent);
    }

    #[test]
    fn list_pane_checks_and_moves_left() {
        let mut transfer = transfer(&["apple", "bread"]);
        let mut view = TransferView::new();

        press(&mut view, &mut transfer, KeyCode::Tab);
        assert_eq!(view.focus, Pane::List);
        press(&mut view, &mut transfer, KeyCode::Char(' '));
        assert_eq!(transfer.state().list_checked_keys, vec!["apple".to_string()]);

        let result = press(&mut view, &mut transfer, KeyCode::Char('<'));
        assert_eq!(result, ActionResult::Changed(vec!["bread".to_string()]));
        assert!(transfer.state().list_checked_keys.is_empty());
    }

    #[test]
    fn header_toggle_from_any_pane() {
        let mut transfer = transfer(&["apple", "bread"]);
        let mut view = TransferView::new();
        press(&mut view, &mut transfer, KeyCode::Char('a'));
        assert_eq!(transfer.state().header_check(), CheckMark::Checked);
        press(&mut view, &mut transfer, KeyCode::Char('a'));
        assert_eq!(transfer.state().header_check(), CheckMark::Unchecked);
    }

    #[test]
    fn typing_in_search_regenerates_each_keystroke() {
        let mut transfer = transfer(&[]);
        let mut view = TransferView::new();

        press(&mut view, &mut transfer, KeyCode::Char('/'));
        assert!(view.editing());
        press(&mut view, &mut transfer, KeyCode::Char('P'));
        assert_eq!(transfer.state().tree_search, "P");
        press(&mut view, &mut transfer, KeyCode::Char('e'));
        assert_eq!(transfer.state().generated.expanded_keys, vec!["pear".to_string()]);

        // 'q' is text while editing
        assert_eq!(press(&mut view, &mut transfer, KeyCode::Char('q')), ActionResult::Continue);
        press(&mut view, &mut transfer, KeyCode::Backspace);
        press(&mut view, &mut transfer, KeyCode::Enter);
        assert!(!view.editing());

        press(&mut view, &mut transfer, KeyCode::Esc);
        assert_eq!(transfer.state().tree_search, "");
        assert_eq!(press(&mut view, &mut transfer, KeyCode::Char('q')), ActionResult::Quit);
    }

    #[test]
    fn search_disabled_ignores_slash() {
        let mut transfer = transfer(&[]);
        let props = transfer.props().clone().with_search(false);
        transfer.set_props(props);
        let mut view = TransferView::new();
        press(&mut view, &mut transfer, KeyCode::Char('/'));
        assert!(!view.editing());
    }

    #[test]
    fn renders_titles_counts_and_rows() {
        let mut transfer = transfer(&["apple"]);
        let mut view = TransferView::new();
        let text = screen(&mut view, &transfer);

        assert!(text.contains("Pantry"));
        assert!(text.contains("Basket"));
        assert!(text.contains("1/3 items"));
        assert!(text.contains("Fruit"));
        assert!(text.contains("Apple"));
        assert!(text.contains("[ > ]"));

        press(&mut view, &mut transfer, KeyCode::Tab);
        press(&mut view, &mut transfer, KeyCode::Char(' '));
        let text = screen(&mut view, &transfer);
        assert!(text.contains("[x] 1/1 items"));
    }

    #[test]
    fn renders_highlighted_match() {
        let mut transfer = transfer(&[]);
        let mut view = TransferView::new();
        press(&mut view, &mut transfer, KeyCode::Char('/'));
        press(&mut view, &mut transfer, KeyCode::Char('e'));
        press(&mut view, &mut transfer, KeyCode::Char('a'));

        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, &transfer, &theme);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();

        let matched: Vec<String> = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .filter(|pos| buffer[*pos].fg == theme.matched)
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        // "Pear" and "Bread" both contain "ea"
        assert_eq!(matched.concat(), "eaea");
    }

    #[test]
    fn renders_empty_panes() {
        let mut transfer = TreeTransfer::new(TransferProps::default());
        let mut view = TransferView::new();
        let text = screen(&mut view, &transfer);
        assert!(text.contains("No data"));
        assert!(text.contains("0 items"));
        assert_eq!(press(&mut view, &mut transfer, KeyCode::Char(' ')), ActionResult::Continue);
    }
}
