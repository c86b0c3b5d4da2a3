//! Pure state transitions for every dispatched action.

use crate::entitlement::EntitlementProvider;

use super::{action::Action, state::State, state::ViewID};

/// Notice shown when advancing past the final question.
pub const COMPLETION_NOTICE: &str = "Interview complete!";

/// Computes new state from actions. Owns the entitlement provider so the
/// purchase confirmation stays out of view code.
pub struct Reducer {
    entitlement: Box<dyn EntitlementProvider>,
}

impl Reducer {
    pub fn new(entitlement: Box<dyn EntitlementProvider>) -> Self {
        Self { entitlement }
    }

    pub fn reduce(&self, prev_state: State, action: Action) -> State {
        let mut state = prev_state;

        match action {
            Action::UpdateView(id) => {
                state.view_id = id;
            }
            Action::SetError(err) => {
                state.error = err;
            }
            Action::SetNotice(notice) => {
                state.notice = notice;
            }
            Action::ShowPaywall => {
                state.show_paywall = true;
            }
            Action::DismissPaywall => {
                state.show_paywall = false;
            }
            Action::ConfirmPurchase => {
                state.show_paywall = false;
                match self.entitlement.purchase() {
                    Ok(granted) => state.entitled = granted,
                    Err(e) => state.error = Some(e.to_string()),
                }
            }
            Action::SetModelTier(tier) => {
                state.tier = tier;
            }
            Action::UpdateProfile { role, industry } => {
                state.role = role;
                state.industry = industry;
            }
            Action::LoggedIn { email, is_admin } => {
                state.email = email;
                state.is_admin = is_admin;
                state.view_id = ViewID::Home;
            }
            Action::SessionStarted(session) => {
                state.session = Some(session);
                state.current_question = 0;
                state.answer.clear();
                state.feedback = None;
                state.notice = None;
                state.view_id = ViewID::Interview;
            }
            Action::UpdateAnswer(answer) => {
                state.answer = answer;
            }
            Action::FeedbackReceived(feedback) => {
                // the answer draft is intentionally left untouched
                state.feedback = Some(feedback);
            }
            Action::Advance => {
                state.feedback = None;
                state.answer.clear();

                let last_index = state
                    .session
                    .as_ref()
                    .map(|s| s.questions.len().saturating_sub(1))
                    .unwrap_or(0);

                if state.current_question < last_index {
                    state.current_question += 1;
                } else {
                    // stays on the last question; only the notice fires
                    state.notice = Some(String::from(COMPLETION_NOTICE));
                }
            }
            Action::StatsLoaded(stats) => {
                state.stats = stats;
            }
        }

        state
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
