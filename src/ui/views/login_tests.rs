use std::sync::mpsc::channel;

use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_str(view: &LoginView, ctx: &CustomWidgetContext, value: &str) {
    for c in value.chars() {
        assert!(view.process_event(&key(KeyCode::Char(c)), ctx));
    }
}

#[test]
fn submits_typed_email_on_enter() {
    let view = LoginView::new();
    let state = State::default();
    let (tx, rx) = channel();
    let ctx = CustomWidgetContext {
        state: &state,
        app_area: Rect::default(),
        events: tx,
    };

    type_str(&view, &ctx, "a@b.c");
    assert!(view.process_event(&key(KeyCode::Enter), &ctx));

    let evt = rx.try_recv().unwrap();
    assert_eq!(
        evt,
        AppEvent::Call(ApiCommand::Login(LoginRequest {
            email: "a@b.c".to_string()
        }))
    );
}

#[test]
fn backspace_edits_email() {
    let view = LoginView::new();
    let state = State::default();
    let (tx, rx) = channel();
    let ctx = CustomWidgetContext {
        state: &state,
        app_area: Rect::default(),
        events: tx,
    };

    type_str(&view, &ctx, "ab");
    assert!(view.process_event(&key(KeyCode::Backspace), &ctx));
    assert!(view.process_event(&key(KeyCode::Enter), &ctx));

    let evt = rx.try_recv().unwrap();
    assert_eq!(
        evt,
        AppEvent::Call(ApiCommand::Login(LoginRequest {
            email: "a".to_string()
        }))
    );
}

#[test]
fn submits_empty_email_unvalidated() {
    let view = LoginView::new();
    let state = State::default();
    let (tx, rx) = channel();
    let ctx = CustomWidgetContext {
        state: &state,
        app_area: Rect::default(),
        events: tx,
    };

    assert!(view.process_event(&key(KeyCode::Enter), &ctx));

    let evt = rx.try_recv().unwrap();
    assert_eq!(
        evt,
        AppEvent::Call(ApiCommand::Login(LoginRequest {
            email: String::new()
        }))
    );
}

#[test]
fn ignores_unrelated_keys() {
    let view = LoginView::new();
    let state = State::default();
    let (tx, rx) = channel();
    let ctx = CustomWidgetContext {
        state: &state,
        app_area: Rect::default(),
        events: tx,
    };

    assert!(!view.process_event(&key(KeyCode::Left), &ctx));
    assert!(rx.try_recv().is_err());
}
