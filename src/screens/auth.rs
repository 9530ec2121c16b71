//! Authentication gateway screen.
//!
//! Mock mode accepts a single command. Submitting it flips the status to
//! `OK` right away and reports [`ScreenAction::Connect`] from `tick` once
//! [`CONNECT_DELAY`] has elapsed. Tearing the screen down first cancels the
//! pending connect.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{DelayedTrigger, TextInput};
use crate::widgets::{DraftgenLogo, TerminalFrame, TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The only command mock mode understands
pub const CONNECT_COMMAND: &str = "connect chatgpt";

/// Delay between accepting the command and reporting the connection
pub const CONNECT_DELAY: Duration = Duration::from_millis(600);

const INPUT_PLACEHOLDER: &str = "awaiting_command...";
const MOCK_MODE_NOTE: &str =
    "Use 'help' for available commands. (Mock Mode: just type 'connect chatgpt')";

/// A submitted command line, after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthCommand {
    Connect,
    Unrecognized,
}

impl AuthCommand {
    /// Trim surrounding whitespace, lowercase, then match exactly.
    pub fn parse(input: &str) -> Self {
        if input.trim().to_lowercase() == CONNECT_COMMAND {
            AuthCommand::Connect
        } else {
            AuthCommand::Unrecognized
        }
    }
}

/// Connection status shown in the boot log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    Waiting,
    Ok,
}

impl AuthStatus {
    pub fn label(self) -> &'static str {
        match self {
            AuthStatus::Waiting => "WAITING",
            AuthStatus::Ok => "OK",
        }
    }
}

/// State owned by the auth screen for as long as it is shown
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub command: TextInput,
    pub status: AuthStatus,
}

pub struct AuthScreen {
    state: AuthState,
    header: Header,
    connect: DelayedTrigger,
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthScreen {
    pub fn new() -> Self {
        Self::with_header(Header::new("AUTH_GATEWAY"))
    }

    pub fn with_header(header: Header) -> Self {
        Self {
            state: AuthState::default(),
            header,
            connect: DelayedTrigger::new(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn status(&self) -> AuthStatus {
        self.state.status
    }

    pub fn is_connect_pending(&self) -> bool {
        self.connect.is_pending()
    }

    /// Submit the current command line at `now`.
    ///
    /// The text is kept either way. While a connect is pending the screen is
    /// settled and further submits are ignored.
    pub fn submit(&mut self, now: Instant) {
        if self.is_connect_pending() {
            debug!("Connect already pending, ignoring submit");
            return;
        }

        match AuthCommand::parse(self.state.command.text()) {
            AuthCommand::Connect => {
                info!("Connect command accepted");
                self.state.status = AuthStatus::Ok;
                self.connect.schedule(now, CONNECT_DELAY);
            }
            AuthCommand::Unrecognized => {
                debug!("Unrecognized command: {:?}", self.state.command.text());
                self.state.status = AuthStatus::Waiting;
            }
        }
    }

    /// Handle a key press at `now`.
    pub fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext, now: Instant) -> ScreenAction {
        let action = ctx.config.keymap.get_action(key.code, key.modifiers);

        match action {
            Some(Action::Confirm) => {
                self.submit(now);
                ScreenAction::None
            }
            Some(Action::Cancel) => ScreenAction::Quit,
            _ => {
                if !self.is_connect_pending() {
                    self.state.command.handle_key(key, action);
                }
                ScreenAction::None
            }
        }
    }

    fn boot_log(&self) -> Vec<Line<'static>> {
        let t = theme();
        let status_style = match self.state.status {
            AuthStatus::Waiting => t.warning_style(),
            AuthStatus::Ok => t.success_style(),
        };
        vec![
            Line::styled("Writing Assistant Interface initialized...", t.text_style()),
            Line::from(vec![
                Span::styled("Loading stylistic mimicry modules... [", t.text_style()),
                Span::styled("OK", t.success_style()),
                Span::styled("]", t.text_style()),
            ]),
            Line::from(vec![
                Span::styled("Checking ChatGPT API connection... [", t.text_style()),
                Span::styled(self.state.status.label(), status_style),
                Span::styled("]", t.text_style()),
            ]),
        ]
    }

    fn instructions() -> Vec<Line<'static>> {
        let t = theme();
        vec![
            Line::styled("To proceed, please establish a connection.", t.title_style()),
            Line::from(vec![
                Span::styled("Type ", t.text_style()),
                Span::styled(CONNECT_COMMAND, t.accent_style()),
                Span::styled(" to authenticate.", t.text_style()),
            ]),
        ]
    }
}

impl Screen for AuthScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let frame_widget = TerminalFrame::new();
        let inner = frame_widget.inner(area);
        frame.render_widget(frame_widget, area);

        let logo = DraftgenLogo::fitting(inner.width);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Header::HEIGHT),
                Constraint::Length(1),
                Constraint::Length(logo.height()),
                Constraint::Length(1),
                Constraint::Length(3), // boot log
                Constraint::Length(1),
                Constraint::Length(2), // instructions
                Constraint::Length(1),
                Constraint::Length(1), // command line
                Constraint::Min(0),
                Constraint::Length(1), // mock mode note
                Constraint::Length(1), // key hints
            ])
            .split(inner);

        self.header.render(frame, chunks[0]);

        let logo_area = chunks[2];
        let logo_width = logo.width().min(logo_area.width);
        let logo_x = logo_area.x + (logo_area.width - logo_width) / 2;
        frame.render_widget(
            logo,
            Rect::new(logo_x, logo_area.y, logo_width, logo_area.height),
        );

        frame.render_widget(Paragraph::new(self.boot_log()), chunks[4]);
        frame.render_widget(Paragraph::new(Self::instructions()), chunks[6]);

        let pending = self.is_connect_pending();
        let input = TextInputWidget::new(&self.state.command)
            .prompt("> ")
            .placeholder(INPUT_PLACEHOLDER)
            .focused(!pending)
            .disabled(pending);
        frame.render_text_input_widget(input, chunks[8]);

        frame.render_widget(
            Paragraph::new(MOCK_MODE_NOTE)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[10],
        );
        Footer::render(frame, chunks[11], &ctx.config.keymap.footer_auth());

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.handle_key(key, ctx, Instant::now()))
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn tick(&mut self, now: Instant) -> ScreenAction {
        if self.connect.fire(now) {
            info!("Connection established");
            ScreenAction::Connect
        } else {
            ScreenAction::None
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.connect.due()
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        if self.connect.cancel() {
            debug!("Cancelled pending connect on teardown");
        }
        Ok(())
    }
}
