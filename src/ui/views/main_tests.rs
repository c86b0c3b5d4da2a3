use std::sync::mpsc::channel;

use ratatui::{
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyModifiers},
    Terminal,
};

use crate::{config::Config, entitlement::SimulatedEntitlement, ui::store::state::ModelTier};

use super::*;

fn setup() -> (Arc<Store>, MainView) {
    let store = Arc::new(Store::new(
        Config::new(),
        Box::new(SimulatedEntitlement::default()),
    ));
    let view = MainView::new(Arc::clone(&store));
    (store, view)
}

fn key(code: KeyCode) -> CrossTermEvent {
    CrossTermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press(
    view: &MainView,
    store: &Arc<Store>,
    tx: &std::sync::mpsc::Sender<crate::events::types::Event>,
    code: KeyCode,
) -> bool {
    let state = store.get_state();
    let ctx = CustomWidgetContext {
        state: &state,
        app_area: Rect::new(0, 0, 80, 30),
        events: tx.clone(),
    };
    view.process_event(&key(code), &ctx)
}

fn render_text(view: &MainView, store: &Arc<Store>) -> String {
    let (tx, _rx) = channel();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    terminal
        .draw(|frame| {
            let state = store.get_state();
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
                events: tx.clone(),
            };
            view.render_ref(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn routes_events_to_active_view() {
    let (store, view) = setup();
    let (tx, rx) = channel();

    // login view is active, so typing + enter logs in
    assert!(press(&view, &store, &tx, KeyCode::Char('x')));
    assert!(press(&view, &store, &tx, KeyCode::Enter));

    assert!(rx.try_recv().is_ok());
}

#[test]
fn error_popover_swallows_input_and_dismisses_on_enter() {
    let (store, view) = setup();
    let (tx, rx) = channel();

    store.dispatch(Action::SetError(Some("boom".to_string())));

    // keys never reach the login view while the popover is up
    assert!(press(&view, &store, &tx, KeyCode::Char('x')));
    assert!(rx.try_recv().is_err());

    assert!(press(&view, &store, &tx, KeyCode::Enter));
    assert!(store.get_state().error.is_none());
    assert!(rx.try_recv().is_err());
}

#[test]
fn paywall_enter_confirms_purchase() {
    let (store, view) = setup();
    let (tx, _rx) = channel();

    store.dispatch(Action::SetModelTier(ModelTier::Pro));
    store.dispatch(Action::ShowPaywall);

    assert!(press(&view, &store, &tx, KeyCode::Enter));

    let state = store.get_state();
    assert!(!state.show_paywall);
    assert!(state.entitled);
}

#[test]
fn paywall_esc_cancels() {
    let (store, view) = setup();
    let (tx, _rx) = channel();

    store.dispatch(Action::ShowPaywall);

    assert!(press(&view, &store, &tx, KeyCode::Esc));

    let state = store.get_state();
    assert!(!state.show_paywall);
    assert!(!state.entitled);
}

#[test]
fn notice_dismisses_on_enter() {
    let (store, view) = setup();
    let (tx, _rx) = channel();

    store.dispatch(Action::SetNotice(Some("Interview complete!".to_string())));

    assert!(press(&view, &store, &tx, KeyCode::Enter));
    assert!(store.get_state().notice.is_none());
}

#[test]
fn error_popover_takes_priority_over_paywall() {
    let (store, view) = setup();
    let (tx, _rx) = channel();

    store.dispatch(Action::ShowPaywall);
    store.dispatch(Action::SetError(Some("boom".to_string())));

    // enter clears the error first; the paywall stays up
    assert!(press(&view, &store, &tx, KeyCode::Enter));

    let state = store.get_state();
    assert!(state.error.is_none());
    assert!(state.show_paywall);
}

#[test]
fn renders_login_screen_chrome() {
    let (store, view) = setup();

    let text = render_text(&view, &store);

    assert!(text.contains("coachterm"));
    assert!(text.contains("Login"));
    assert!(text.contains("(q) quit"));
    assert!(text.contains("AI Interview Coach"));
}

#[test]
fn renders_paywall_popover() {
    let (store, view) = setup();

    store.dispatch(Action::ShowPaywall);

    let text = render_text(&view, &store);

    assert!(text.contains("Upgrade Required"));
    assert!(text.contains("buy pro $9.99"));
}

#[test]
fn renders_logged_in_email_in_chrome() {
    let (store, view) = setup();

    store.dispatch(Action::LoggedIn {
        email: "user@example.com".to_string(),
        is_admin: false,
    });

    let text = render_text(&view, &store);

    assert!(text.contains("user@example.com"));
    assert!(text.contains("Home"));
}
