use std::{cell::RefCell, sync::Arc};

use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    api::types::SubmitRequest,
    events::types::{ApiCommand, Event as AppEvent},
    ui::components::{
        header::Header,
        input::{Input, InputState},
    },
    ui::store::{
        action::Action,
        state::{State, ViewID},
        Store,
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

/// The running interview: one question at a time, a free-text answer
/// draft, and the backend's feedback once an answer has been submitted.
///
/// There is no way back to the dashboard from here. Advancing past the
/// last question fires a completion notice and stays put.
pub struct InterviewView {
    store: Arc<Store>,
    answer_state: RefCell<InputState>,
}

impl InterviewView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            answer_state: RefCell::new(InputState {
                editing: true,
                value: String::new(),
            }),
        }
    }

    fn submit_answer(&self, ctx: &CustomWidgetContext) {
        let state = ctx.state;

        let session = match state.session.as_ref() {
            Some(s) => s,
            None => return,
        };
        let question = match state.current_question_text() {
            Some(q) => q.to_string(),
            None => return,
        };

        let answer = self.answer_state.borrow().value.clone();

        self.store.dispatch(Action::UpdateAnswer(answer.clone()));
        let _ = ctx
            .events
            .send(AppEvent::Call(ApiCommand::SubmitAnswer(SubmitRequest {
                session_id: session.session_id.clone(),
                question,
                answer_text: answer,
            })));
    }

    fn advance(&self) {
        self.answer_state.borrow_mut().value.clear();
        self.store.dispatch(Action::Advance);
    }

    fn render_question(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let total = ctx
            .state
            .session
            .as_ref()
            .map(|s| s.questions.len())
            .unwrap_or(0);

        let rects = Layout::vertical([
            Constraint::Length(1), // question counter
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // question text
        ])
        .split(area);

        let counter = Header::new(format!(
            "Question {} of {}",
            ctx.state.current_question + 1,
            total
        ));
        counter.render(rects[0], buf, ctx);

        let question = Paragraph::new(ctx.state.current_question_text().unwrap_or_default())
            .style(Style::new().fg(ctx.state.colors.text))
            .wrap(Wrap { trim: true });
        question.render(rects[2], buf);
    }

    fn render_answer_form(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let answer = Input::new("Your Answer");
        answer.render(area, buf, &mut self.answer_state.borrow_mut(), ctx);
    }

    fn render_feedback(
        &self,
        feedback: &str,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let rects = Layout::vertical([
            Constraint::Length(1), // label
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // feedback text
        ])
        .split(area);

        let label = Header::new("Feedback".to_string());
        label.render(rects[0], buf, ctx);

        let body = Paragraph::new(feedback)
            .style(Style::new().fg(ctx.state.colors.accent))
            .wrap(Wrap { trim: true });
        body.render(rects[2], buf);
    }
}

impl View for InterviewView {
    fn id(&self) -> ViewID {
        ViewID::Interview
    }

    fn legend(&self, state: &State) -> &str {
        if state.feedback.is_some() {
            "(enter) next question"
        } else {
            "(enter) submit answer"
        }
    }
}

impl CustomWidgetRef for InterviewView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let view_rects = Layout::vertical([
            Constraint::Length(6), // question card
            Constraint::Length(1), // spacer
            Constraint::Min(3),    // answer or feedback
        ])
        .split(area);

        self.render_question(view_rects[0], buf, ctx);

        match ctx.state.feedback.as_ref() {
            Some(feedback) => self.render_feedback(feedback, view_rects[2], buf, ctx),
            None => self.render_answer_form(view_rects[2], buf, ctx),
        }
    }
}

impl EventHandler for InterviewView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;
        let awaiting_feedback = ctx.state.feedback.is_none();

        if let Event::Key(key) = evt {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Enter => {
                        if awaiting_feedback {
                            self.submit_answer(ctx);
                        } else {
                            self.advance();
                        }
                        handled = true;
                    }
                    KeyCode::Backspace => {
                        if awaiting_feedback {
                            self.answer_state.borrow_mut().value.pop();
                            handled = true;
                        }
                    }
                    KeyCode::Char(c) => {
                        if awaiting_feedback {
                            self.answer_state.borrow_mut().value.push(c);
                            handled = true;
                        } else if c == 'n' {
                            self.advance();
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
#[path = "./interview_tests.rs"]
mod tests;
