//! Authentication gateway driven through the whole app.

mod common;

use common::{ctrl, key, render_app, type_text};
use crossterm::event::KeyCode;
use draftgen::app::POLL_INTERVAL;
use draftgen::screens::AuthStatus;
use draftgen::{App, Config, View};
use std::time::{Duration, Instant};

fn auth_status(app: &App) -> AuthStatus {
    match app.view() {
        View::Auth(screen) => screen.status(),
        View::Directory(_) => panic!("expected the auth view"),
    }
}

fn command_text(app: &App) -> String {
    match app.view() {
        View::Auth(screen) => screen.state().command.text().to_string(),
        View::Directory(_) => panic!("expected the auth view"),
    }
}

#[test]
fn test_starts_on_auth_view() {
    let mut app = App::new(Config::default());
    assert!(!app.session().is_connected());
    assert_eq!(auth_status(&app), AuthStatus::Waiting);

    let screen = render_app(&mut app, 100, 40);
    assert!(screen.contains("SYSTEM: DRAFTGEN-OS V1.0.4"));
    assert!(screen.contains(">> AUTH_GATEWAY"));
    assert!(screen.contains(&draftgen::utils::today()));
    assert!(screen.contains("Writing Assistant Interface initialized..."));
    assert!(screen.contains("Loading stylistic mimicry modules... [OK]"));
    assert!(screen.contains("Checking ChatGPT API connection... [WAITING]"));
    assert!(screen.contains("To proceed, please establish a connection."));
    assert!(screen.contains("Type connect chatgpt to authenticate."));
    assert!(screen.contains("> awaiting_command..."));
    assert!(screen.contains("Mock Mode: just type 'connect chatgpt'"));
}

#[test]
fn test_connect_command_reaches_directory() {
    let mut app = App::new(Config::default());
    type_text(&mut app, "  Connect ChatGPT ");
    app.handle_event(key(KeyCode::Enter)).unwrap();

    // Status flips immediately and is drawn before the switch
    assert_eq!(auth_status(&app), AuthStatus::Ok);
    let screen = render_app(&mut app, 100, 40);
    assert!(screen.contains("Checking ChatGPT API connection... [OK]"));

    app.tick(Instant::now()).unwrap();
    assert!(matches!(app.view(), View::Auth(_)));
    assert!(!app.session().is_connected());

    app.tick(Instant::now() + Duration::from_millis(700)).unwrap();
    assert!(app.session().is_connected());
    assert!(matches!(app.view(), View::Directory(_)));

    let screen = render_app(&mut app, 100, 40);
    assert!(screen.contains(">> PROJECT_DIRECTORY"));
    assert!(screen.contains("ID: DEMO-1"));
    assert!(screen.contains("scifi-novel-draft"));
}

#[test]
fn test_poll_timeout_shrinks_toward_deadline() {
    let mut app = App::new(Config::default());
    type_text(&mut app, "connect chatgpt");
    app.handle_event(key(KeyCode::Enter)).unwrap();

    let soon = Instant::now() + Duration::from_millis(500);
    assert!(app.poll_timeout(soon) <= Duration::from_millis(100));
    assert!(app.poll_timeout(Instant::now()) <= POLL_INTERVAL);
}

#[test]
fn test_wrong_commands_keep_waiting() {
    let mut app = App::new(Config::default());

    for attempt in ["help", "connect", "connect chat gpt"] {
        type_text(&mut app, attempt);
        app.handle_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(auth_status(&app), AuthStatus::Waiting);
        assert_eq!(command_text(&app), attempt);

        for _ in 0..attempt.len() {
            app.handle_event(key(KeyCode::Backspace)).unwrap();
        }
    }

    // Empty submit
    app.handle_event(key(KeyCode::Enter)).unwrap();
    app.tick(Instant::now() + Duration::from_secs(10)).unwrap();
    assert_eq!(auth_status(&app), AuthStatus::Waiting);
    assert!(!app.session().is_connected());
}

#[test]
fn test_quit_during_delay_cancels_connect() {
    let mut app = App::new(Config::default());
    type_text(&mut app, "connect chatgpt");
    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(auth_status(&app), AuthStatus::Ok);

    app.handle_event(ctrl('c')).unwrap();
    assert!(app.should_quit());

    app.tick(Instant::now() + Duration::from_secs(1)).unwrap();
    assert!(!app.session().is_connected());
    assert!(matches!(app.view(), View::Auth(_)));
}

#[test]
fn test_esc_quits_from_auth() {
    let mut app = App::new(Config::default());
    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_directory_never_reverts() {
    let mut app = App::new(Config::default());
    type_text(&mut app, "connect chatgpt");
    app.handle_event(key(KeyCode::Enter)).unwrap();
    app.tick(Instant::now() + Duration::from_secs(1)).unwrap();

    // Keys that would matter on the auth screen, plus the inert logout
    app.handle_event(key(KeyCode::Enter)).unwrap();
    app.handle_event(ctrl('x')).unwrap();
    app.handle_event(key(KeyCode::Char('n'))).unwrap();
    app.tick(Instant::now() + Duration::from_secs(60)).unwrap();

    assert!(app.session().is_connected());
    assert!(matches!(app.view(), View::Directory(_)));
    assert!(!app.should_quit());
}
