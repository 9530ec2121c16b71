use crate::config::Config;
use crate::folder::demo_folders;
use crate::screens::{
    AuthScreen, DirectoryScreen, RenderContext, Screen, ScreenAction, ScreenContext,
};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::time::{Duration, Instant};
use tracing::info;

/// Upper bound on how long the loop sleeps waiting for input
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Whether the user has authenticated. Only ever goes from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    connected: bool,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Mark the session connected. Returns false if it already was.
    pub fn connect(&mut self) -> bool {
        if self.connected {
            return false;
        }
        self.connected = true;
        true
    }
}

/// The screen currently shown
pub enum View {
    Auth(AuthScreen),
    Directory(DirectoryScreen),
}

impl View {
    fn screen(&self) -> &dyn Screen {
        match self {
            View::Auth(screen) => screen,
            View::Directory(screen) => screen,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            View::Auth(screen) => screen,
            View::Directory(screen) => screen,
        }
    }
}

/// Main application state
pub struct App {
    config: Config,
    session: SessionState,
    view: View,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            session: SessionState::default(),
            view: View::Auth(AuthScreen::new()),
            should_quit: false,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        let result = self.event_loop(tui);
        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        loop {
            self.tick(Instant::now())?;

            let mut drawn = Ok(());
            tui.terminal_mut().draw(|frame| drawn = self.draw(frame))?;
            drawn?;

            if self.should_quit {
                break;
            }

            if let Some(event) = tui.poll_event(self.poll_timeout(Instant::now()))? {
                self.handle_event(event)?;
            }
        }
        Ok(())
    }

    /// Draw the active screen over the whole frame
    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config);
        self.view.screen_mut().render(frame, area, &ctx)
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        // Ctrl+C always quits, even while typing
        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL)
            {
                return self.quit();
            }
        }

        let ctx = ScreenContext::new(&self.config);
        let action = self.view.screen_mut().handle_event(event, &ctx)?;
        self.apply(action)
    }

    /// Let the active screen act on elapsed time
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        let action = self.view.screen_mut().tick(now);
        self.apply(action)
    }

    /// How long the loop may wait for input before the next tick is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.view
            .screen()
            .next_deadline()
            .map_or(POLL_INTERVAL, |due| {
                due.saturating_duration_since(now).min(POLL_INTERVAL)
            })
    }

    fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => Ok(()),
            ScreenAction::Connect => self.connect(),
            ScreenAction::OpenFolder(id) => {
                info!("Open folder {} requested (nothing to open in mock mode)", id);
                Ok(())
            }
            ScreenAction::Quit => self.quit(),
        }
    }

    fn connect(&mut self) -> Result<()> {
        if !self.session.connect() {
            return Ok(());
        }
        info!("Session connected, showing project directory");

        let ctx = ScreenContext::new(&self.config);
        self.view.screen_mut().on_exit(&ctx)?;
        self.view = View::Directory(DirectoryScreen::new(demo_folders()));
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        if self.should_quit {
            return Ok(());
        }
        info!("Quit requested");

        let ctx = ScreenContext::new(&self.config);
        self.view.screen_mut().on_exit(&ctx)?;
        self.should_quit = true;
        Ok(())
    }
}
