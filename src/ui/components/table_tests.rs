use crate::ui::store::state::State;

use super::*;
use ratatui::{backend::TestBackend, Terminal};

fn buffer_text(backend: &TestBackend) -> String {
    backend
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect()
}

fn stats_items() -> Vec<Vec<String>> {
    vec![
        vec!["a@example.com".to_string(), "3".to_string()],
        vec!["b@example.com".to_string(), "1".to_string()],
        vec!["c@example.com".to_string(), "7".to_string()],
    ]
}

#[test]
fn renders_table_component() {
    let headers = Some(vec!["EMAIL".to_string(), "SESSIONS".to_string()]);
    let table = Table::new(stats_items(), headers, vec![40, 12], 2);
    let state = State::default();
    let channel = std::sync::mpsc::channel();
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
                events: channel.0,
            };

            table.render_ref(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    let text = buffer_text(terminal.backend());
    assert!(text.contains("EMAIL"));
    assert!(text.contains("SESSIONS"));
    assert!(text.contains("a@example.com"));
}

#[test]
fn selection_does_not_wrap() {
    let mut table = Table::new(stats_items(), None, vec![40, 12], DEFAULT_ITEM_HEIGHT);

    assert_eq!(table.selected(), None);
    assert_eq!(table.next(), 0);
    assert_eq!(table.next(), 1);
    assert_eq!(table.next(), 2);
    // stays on last row
    assert_eq!(table.next(), 2);

    assert_eq!(table.previous(), 1);
    assert_eq!(table.previous(), 0);
    // stays on first row
    assert_eq!(table.previous(), 0);
}

#[test]
fn next_on_empty_table_does_not_panic() {
    let mut table = Table::new(vec![], None, vec![40, 12], DEFAULT_ITEM_HEIGHT);

    assert_eq!(table.next(), 0);
    assert_eq!(table.previous(), 0);
}

#[test]
fn update_items_clamps_selection() {
    let mut table = Table::new(stats_items(), None, vec![40, 12], DEFAULT_ITEM_HEIGHT);

    table.next();
    table.next();
    table.next();
    assert_eq!(table.selected(), Some(2));

    let shrunk = vec![vec!["a@example.com".to_string(), "3".to_string()]];
    let selected = table.update_items(shrunk);

    assert_eq!(selected, Some(0));
    assert_eq!(table.selected(), Some(0));
}

#[test]
fn update_items_keeps_valid_selection() {
    let mut table = Table::new(stats_items(), None, vec![40, 12], DEFAULT_ITEM_HEIGHT);

    table.next();
    assert_eq!(table.selected(), Some(0));

    let selected = table.update_items(stats_items());

    assert_eq!(selected, Some(0));
}

#[test]
fn fits_content_to_width() {
    assert_eq!(fit_to_width("short", 40), "short");

    let fitted = fit_to_width("a-very-long-email-address@example.com", 10);
    assert!(fitted.ends_with(ELLIPSIS));
    assert!(fitted.width() <= 10);
}

#[test]
fn fits_multibyte_content_to_width() {
    let fitted = fit_to_width("面接コーチのユーザー@example.com", 10);
    assert!(fitted.ends_with(ELLIPSIS));
    assert!(fitted.width() <= 10);

    let fitted = fit_to_width("tëst-üser@example.com", 8);
    assert!(fitted.ends_with(ELLIPSIS));
    assert!(fitted.width() <= 8);
}
