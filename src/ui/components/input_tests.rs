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

#[test]
fn renders_input_component_non_edit_mode() {
    let input = Input::new("Role");

    let mut input_state = InputState {
        editing: false,
        value: "Product Manager".to_string(),
    };

    let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
    let state = State::default();
    let channel = std::sync::mpsc::channel();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
                events: channel.0,
            };

            input.render(frame.area(), frame.buffer_mut(), &mut input_state, &ctx);
        })
        .unwrap();

    assert!(buffer_text(terminal.backend()).contains("Role: Product Manager"));
}

#[test]
fn renders_input_component_edit_mode() {
    let input = Input::new("Role");

    let mut input_state = InputState {
        editing: true,
        value: "Engineer".to_string(),
    };

    let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
    let state = State::default();
    let channel = std::sync::mpsc::channel();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
                events: channel.0,
            };

            input.render(frame.area(), frame.buffer_mut(), &mut input_state, &ctx);
        })
        .unwrap();

    assert!(buffer_text(terminal.backend()).contains("Role: Engineer"));
}

#[test]
fn empty_state_starts_blank_and_not_editing() {
    let input_state = InputState::empty();
    assert!(!input_state.editing);
    assert!(input_state.value.is_empty());
}
