//! Full-screen terminal application hosting one transfer control

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use crate::app::actions::ActionResult;
use crate::app::events::{AppEvent, EventHandler};
use crate::transfer::TreeTransfer;
use crate::ui::layout::{AppLayout, DialogLayout};
use crate::ui::theme::Theme;
use crate::ui::transfer_view::TransferView;

/// Terminal application acting as the owner of the control's target set
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_handler: EventHandler,

    transfer: TreeTransfer,
    view: TransferView,

    // UI state
    theme: Theme,
    show_help: bool,
    last_change: Option<usize>,
}

impl TuiApp {
    pub fn new(transfer: TreeTransfer, tick_rate: Duration) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let theme = Theme::by_name(transfer.props().class_name.as_deref());

        Ok(Self {
            terminal,
            event_handler: EventHandler::new(tick_rate),
            transfer,
            view: TransferView::new(),
            theme,
            show_help: false,
            last_change: None,
        })
    }

    /// Run until the user quits; returns the final target set
    pub fn run(&mut self) -> Result<Vec<String>> {
        loop {
            self.draw()?;

            if let Some(event) = self.event_handler.next() {
                match event {
                    AppEvent::Key(key) => {
                        if self.show_help {
                            self.show_help = false;
                            continue;
                        }

                        match self.view.handle_key(key, &mut self.transfer) {
                            ActionResult::Quit => break,
                            ActionResult::ToggleHelp => self.show_help = true,
                            ActionResult::Changed(keys) => {
                                // This app owns the target set: accept every change
                                self.last_change = Some(keys.len());
                                self.transfer.set_target(keys);
                            }
                            ActionResult::Continue => {}
                        }
                    }
                    AppEvent::Resize(_, _) => {}
                    AppEvent::Tick => {}
                }
            }
        }

        Ok(self.transfer.props().target.clone())
    }

    fn draw(&mut self) -> Result<()> {
        let theme = &self.theme;
        let show_help = self.show_help;
        let last_change = self.last_change;
        let transfer = &self.transfer;
        let view = &mut self.view;

        self.terminal.draw(|frame| {
            let layout = AppLayout::new(frame.area());

            view.render(frame, layout.content, transfer, theme);

            let target_count = transfer.props().target.len();
            let mut status = vec![
                Span::raw(" "),
                Span::styled(format!("Target: {}", target_count), theme.normal()),
            ];
            if let Some(count) = last_change {
                status.push(Span::raw(" │ "));
                status.push(Span::styled(format!("Last change: {} keys", count), theme.accent()));
            }
            status.push(Span::raw(" │ "));
            status.push(Span::styled("?=help q=quit", theme.dim()));

            frame.render_widget(Paragraph::new(Line::from(status)), layout.status);

            if show_help {
                render_help(frame, theme);
            }
        })?;

        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let help_area = DialogLayout::centered(area, 56, 20).dialog;

    let help_text = vec![
        "",
        "  Tree Transfer - Keyboard Shortcuts",
        "  ──────────────────────────────────",
        "",
        "  Tab           Switch pane",
        "  ↑/↓, j/k      Move cursor",
        "  PgUp/PgDn     Page up/down",
        "  Home/End      Go to top/bottom",
        "  Space         Toggle check box",
        "  →/←, Enter    Expand/collapse branch",
        "  a             Check/uncheck all targets",
        "  >             Move checked items right",
        "  <             Remove checked targets",
        "  /             Search focused pane",
        "  Esc           Clear search",
        "",
        "  Press any key to close",
    ];

    let help_block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(theme.border_focused())
        .style(theme.normal());

    let help_content = Paragraph::new(help_text.join("\n"))
        .block(help_block)
        .style(theme.normal());

    frame.render_widget(Clear, help_area);
    frame.render_widget(help_content, help_area);
}
