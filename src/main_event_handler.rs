//! Executes requested API calls off the UI thread and applies their
//! results to the store.

use color_eyre::eyre::Result;
use std::sync::{mpsc::Receiver, Arc};

use crate::{
    api::client::ApiClient,
    api::types::{LoginRequest, StartRequest, SubmitRequest},
    events::types::{ApiCommand, Event},
    ui::store::{action::Action, state::InterviewSession, Store},
};

// every failure collapses to one generic, user-facing message per
// operation - no status classification, no retry
const LOGIN_FAILED: &str = "Check backend connection";
const START_FAILED: &str = "Could not generate questions";
const SUBMIT_FAILED: &str = "Submission failed";
const STATS_FAILED: &str = "Could not load stats";

/// Runs the api worker loop: receives commands from the views, performs
/// the blocking HTTP call, and dispatches the outcome. Requests are not
/// de-duplicated; overlapping submissions are the caller's problem until
/// the backend contract clarifies idempotency.
pub struct MainEventHandler {
    store: Arc<Store>,
    client: Box<dyn ApiClient>,
    rx: Receiver<Event>,
}

impl MainEventHandler {
    pub fn new(store: Arc<Store>, client: Box<dyn ApiClient>, rx: Receiver<Event>) -> Self {
        Self { store, client, rx }
    }

    /// Blocks processing incoming events until a quit event is received or
    /// every sender has hung up.
    pub fn process_events(&self) -> Result<()> {
        while let Ok(evt) = self.rx.recv() {
            match evt {
                Event::Call(cmd) => {
                    log::debug!("executing api call: {}", cmd);
                    self.handle_call(cmd);
                }
                Event::Quit => return Ok(()),
            }
        }

        Ok(())
    }

    fn handle_call(&self, cmd: ApiCommand) {
        match cmd {
            ApiCommand::Login(req) => self.handle_login(req),
            ApiCommand::StartSession(req) => self.handle_start(req),
            ApiCommand::SubmitAnswer(req) => self.handle_submit(req),
            ApiCommand::FetchStats => self.handle_stats(),
        }
    }

    fn handle_login(&self, req: LoginRequest) {
        match self.client.login(&req) {
            Ok(res) => {
                self.store.dispatch(Action::LoggedIn {
                    email: req.email,
                    is_admin: res.is_admin,
                });
            }
            Err(e) => self.report_failure("login", LOGIN_FAILED, e),
        }
    }

    fn handle_start(&self, req: StartRequest) {
        match self.client.start_session(&req) {
            Ok(res) => {
                self.store.dispatch(Action::SessionStarted(InterviewSession {
                    session_id: res.session_id,
                    questions: res.questions,
                }));
            }
            Err(e) => self.report_failure("start", START_FAILED, e),
        }
    }

    fn handle_submit(&self, req: SubmitRequest) {
        match self.client.submit_answer(&req) {
            // the answer draft is retained; only feedback changes
            Ok(res) => self.store.dispatch(Action::FeedbackReceived(res.feedback)),
            Err(e) => self.report_failure("submit", SUBMIT_FAILED, e),
        }
    }

    fn handle_stats(&self) {
        match self.client.admin_stats() {
            Ok(res) => self.store.dispatch(Action::StatsLoaded(res.users)),
            Err(e) => self.report_failure("stats", STATS_FAILED, e),
        }
    }

    fn report_failure(&self, op: &str, message: &str, err: color_eyre::eyre::Report) {
        log::warn!("{op} call failed: {err}");
        self.store.dispatch(Action::SetError(Some(message.to_string())));
    }
}

#[cfg(test)]
#[path = "./main_event_handler_tests.rs"]
mod tests;
