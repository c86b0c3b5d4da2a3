use std::cell::RefCell;

use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::{
    api::types::LoginRequest,
    events::types::{ApiCommand, Event as AppEvent},
    ui::components::{
        header::Header,
        input::{Input, InputState},
    },
    ui::store::state::{State, ViewID},
};

use super::traits::{CustomStatefulWidget, CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View};

/// Entry screen: a single unvalidated email input. Submitting sends the
/// login call; the screen only changes once the backend answers.
pub struct LoginView {
    email_state: RefCell<InputState>,
}

impl LoginView {
    pub fn new() -> Self {
        Self {
            email_state: RefCell::new(InputState {
                // the email field is always editable on this screen
                editing: true,
                value: String::new(),
            }),
        }
    }

    fn submit(&self, ctx: &CustomWidgetContext) {
        let email = self.email_state.borrow().value.clone();
        let _ = ctx.events.send(AppEvent::Call(ApiCommand::Login(LoginRequest { email })));
    }
}

impl View for LoginView {
    fn id(&self) -> ViewID {
        ViewID::Login
    }

    fn legend(&self, _state: &State) -> &str {
        "(enter) log in"
    }
}

impl CustomWidgetRef for LoginView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let view_rects = Layout::vertical([
            Constraint::Length(1), // label
            Constraint::Length(1), // spacer
            Constraint::Length(1), // email input
            Constraint::Length(1), // spacer
            Constraint::Length(1), // admin hint
        ])
        .split(area);

        let header = Header::new("AI Interview Coach".to_string());
        header.render(view_rects[0], buf, ctx);

        let email = Input::new("Email");
        email.render(view_rects[2], buf, &mut self.email_state.borrow_mut(), ctx);

        let hint = Paragraph::new(format!(
            "admin account: {}",
            ctx.state.config.admin_email
        ))
        .style(Style::new().fg(ctx.state.colors.scroll_bar_fg));
        hint.render(view_rects[4], buf);
    }
}

impl EventHandler for LoginView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Enter => {
                        self.submit(ctx);
                        handled = true;
                    }
                    KeyCode::Backspace => {
                        self.email_state.borrow_mut().value.pop();
                        handled = true;
                    }
                    KeyCode::Char(c) => {
                        self.email_state.borrow_mut().value.push(c);
                        handled = true;
                    }
                    _ => {}
                }
            }
        }

        handled
    }
}

#[cfg(test)]
#[path = "./login_tests.rs"]
mod tests;
