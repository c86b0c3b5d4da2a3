use crate::api::types::LoginRequest;

use super::*;

#[test]
fn displays_command_names() {
    assert_eq!(
        ApiCommand::Login(LoginRequest {
            email: "a@b.com".to_string()
        })
        .to_string(),
        "login"
    );
    assert_eq!(ApiCommand::FetchStats.to_string(), "stats");
}

#[test]
fn events_are_comparable() {
    assert_eq!(Event::Quit, Event::Quit);
    assert_ne!(
        Event::Quit,
        Event::Call(ApiCommand::FetchStats)
    );
}
