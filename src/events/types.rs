use std::fmt::Display;

use crate::api::types::{LoginRequest, StartRequest, SubmitRequest};

/// A network operation requested by a view. Executed off the UI thread so
/// the interface stays interactive while a request is in flight.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ApiCommand {
    Login(LoginRequest),
    StartSession(StartRequest),
    SubmitAnswer(SubmitRequest),
    FetchStats,
}

impl Display for ApiCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiCommand::Login(_) => write!(f, "login"),
            ApiCommand::StartSession(_) => write!(f, "start"),
            ApiCommand::SubmitAnswer(_) => write!(f, "submit"),
            ApiCommand::FetchStats => write!(f, "stats"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Event {
    Call(ApiCommand),
    Quit,
}

#[cfg(test)]
#[path = "./types_tests.rs"]
mod tests;
