use std::{cell::RefCell, sync::Arc};

use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::{
    api::types::StartRequest,
    events::types::{ApiCommand, Event as AppEvent},
    ui::components::{
        field::Field,
        header::Header,
        input::{Input, InputState},
    },
    ui::store::{
        action::Action,
        state::{ModelTier, State, ViewID},
        Store,
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

#[derive(Debug, Clone)]
enum Focus {
    Role,
    Industry,
}

/// Dashboard screen: interview configuration (role, industry, model tier)
/// plus the entry points for starting an interview and, for admins, the
/// stats panel.
pub struct HomeView {
    store: Arc<Store>,
    editing: RefCell<bool>,
    focus: RefCell<Focus>,
    role_state: RefCell<InputState>,
    industry_state: RefCell<InputState>,
}

impl HomeView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            editing: RefCell::new(false),
            focus: RefCell::new(Focus::Role),
            role_state: RefCell::new(InputState::empty()),
            industry_state: RefCell::new(InputState::empty()),
        }
    }

    fn push_input_char(&self, char: char) {
        match *self.focus.borrow() {
            Focus::Role => self.role_state.borrow_mut().value.push(char),
            Focus::Industry => self.industry_state.borrow_mut().value.push(char),
        };
    }

    fn pop_input_char(&self) {
        match *self.focus.borrow() {
            Focus::Role => {
                self.role_state.borrow_mut().value.pop();
            }
            Focus::Industry => {
                self.industry_state.borrow_mut().value.pop();
            }
        };
    }

    fn focus_next(&self) {
        let next_focus = match *self.focus.borrow() {
            Focus::Role => {
                self.role_state.borrow_mut().editing = false;
                self.industry_state.borrow_mut().editing = true;
                Focus::Industry
            }
            Focus::Industry => {
                self.role_state.borrow_mut().editing = true;
                self.industry_state.borrow_mut().editing = false;
                Focus::Role
            }
        };

        *self.focus.borrow_mut() = next_focus;
    }

    fn reset_input_state(&self) {
        self.role_state.borrow_mut().editing = false;
        self.industry_state.borrow_mut().editing = false;
    }

    fn save_profile(&self) {
        self.store.dispatch(Action::UpdateProfile {
            role: self.role_state.borrow().value.clone(),
            industry: self.industry_state.borrow().value.clone(),
        });
    }

    fn start_interview(&self, ctx: &CustomWidgetContext) {
        let state = ctx.state;

        // paywall gate: the premium tier never reaches the network without
        // an entitlement
        if state.tier == ModelTier::Pro && !state.entitled {
            self.store.dispatch(Action::ShowPaywall);
            return;
        }

        let _ = ctx
            .events
            .send(AppEvent::Call(ApiCommand::StartSession(StartRequest {
                email: state.email.clone(),
                role: state.role.clone(),
                industry: state.industry.clone(),
                model_key: state.tier.key().to_string(),
            })));
    }

    fn open_admin_panel(&self, ctx: &CustomWidgetContext) {
        let _ = ctx.events.send(AppEvent::Call(ApiCommand::FetchStats));
        self.store.dispatch(Action::UpdateView(ViewID::Admin));
    }

    fn render_tier(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let label = Span::from("Intelligence <->: ");
        let value = Span::from(ctx.state.tier.label())
            .style(Style::default().fg(ctx.state.colors.selected_row_fg));
        let line = Line::from(vec![label, value]);
        line.render(area, buf);
    }
}

impl View for HomeView {
    fn id(&self) -> ViewID {
        ViewID::Home
    }

    fn legend(&self, state: &State) -> &str {
        if *self.editing.borrow() {
            "(esc) discard | (tab) focus next | (enter) save profile"
        } else if state.is_admin {
            "(s) start interview | (e) edit profile | (<->) model tier | (a) admin panel"
        } else {
            "(s) start interview | (e) edit profile | (<->) model tier"
        }
    }
}

impl CustomWidgetRef for HomeView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let view_rects = Layout::vertical([
            Constraint::Length(1), // label
            Constraint::Length(1), // spacer
            Constraint::Length(1), // email
            Constraint::Length(1), // spacer
            Constraint::Length(1), // role
            Constraint::Length(1), // spacer
            Constraint::Length(1), // industry
            Constraint::Length(1), // spacer
            Constraint::Length(1), // model tier
        ])
        .split(area);

        if !*self.editing.borrow() {
            self.role_state.borrow_mut().value = ctx.state.role.clone();
            self.industry_state.borrow_mut().value = ctx.state.industry.clone();
        }

        let header = Header::new("Dashboard".to_string());
        header.render(view_rects[0], buf, ctx);

        let email = Field::new("Email".to_string(), ctx.state.email.clone());
        email.render(view_rects[2], buf, ctx);

        let role = Input::new("Target Role");
        let industry = Input::new("Industry");

        role.render(view_rects[4], buf, &mut self.role_state.borrow_mut(), ctx);
        industry.render(view_rects[6], buf, &mut self.industry_state.borrow_mut(), ctx);

        self.render_tier(view_rects[8], buf, ctx);
    }
}

impl EventHandler for HomeView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Esc => {
                        if *self.editing.borrow() {
                            self.reset_input_state();
                            *self.focus.borrow_mut() = Focus::Role;
                            *self.editing.borrow_mut() = false;
                            handled = true;
                        }
                    }
                    KeyCode::Tab | KeyCode::BackTab => {
                        if *self.editing.borrow() {
                            self.focus_next();
                            handled = true;
                        }
                    }
                    KeyCode::Enter => {
                        if *self.editing.borrow() {
                            self.save_profile();
                            self.reset_input_state();
                            *self.focus.borrow_mut() = Focus::Role;
                            *self.editing.borrow_mut() = false;
                            handled = true;
                        }
                    }
                    KeyCode::Left | KeyCode::Right => {
                        if !*self.editing.borrow() {
                            self.store
                                .dispatch(Action::SetModelTier(ctx.state.tier.toggled()));
                            handled = true;
                        }
                    }
                    KeyCode::Backspace => {
                        if *self.editing.borrow() {
                            self.pop_input_char();
                            handled = true;
                        }
                    }
                    KeyCode::Char(c) => {
                        if *self.editing.borrow() {
                            self.push_input_char(c);
                            handled = true;
                        } else if c == 'e' {
                            *self.editing.borrow_mut() = true;
                            self.role_state.borrow_mut().editing = true;
                            handled = true;
                        } else if c == 's' {
                            self.start_interview(ctx);
                            handled = true;
                        } else if c == 'a' && ctx.state.is_admin {
                            self.open_admin_panel(ctx);
                            handled = true;
                        }
                    }
                    _ => {}
                }
            }
        }

        handled
    }
}

#[cfg(test)]
#[path = "./home_tests.rs"]
mod tests;
