use color_eyre::eyre::eyre;
use std::sync::{
    mpsc::{channel, Sender},
    Arc,
};

use crate::{
    api::client::MockApiClient,
    api::types::{LoginResponse, StartResponse, StatsResponse, SubmitResponse, UserStats},
    config::Config,
    entitlement::SimulatedEntitlement,
    ui::store::{
        action::Action,
        state::{InterviewSession, ViewID},
        Store,
    },
};

use super::*;

struct SetUpReturn {
    store: Arc<Store>,
    handler: MainEventHandler,
    tx: Sender<Event>,
}

fn setup(mock_client: MockApiClient) -> SetUpReturn {
    let store = Arc::new(Store::new(
        Config::new(),
        Box::new(SimulatedEntitlement::default()),
    ));
    let (tx, rx) = channel();
    let handler = MainEventHandler::new(Arc::clone(&store), Box::new(mock_client), rx);
    SetUpReturn { store, handler, tx }
}

fn run(setup_return: &SetUpReturn, cmd: ApiCommand) {
    setup_return.tx.send(Event::Call(cmd)).unwrap();
    setup_return.tx.send(Event::Quit).unwrap();
    setup_return.handler.process_events().unwrap();
}

#[test]
fn handles_login_success() {
    let mut mock_client = MockApiClient::new();
    mock_client
        .expect_login()
        .withf(|req| req.email == "user@example.com")
        .returning(|_| Ok(LoginResponse { is_admin: true }))
        .times(1);

    let s = setup(mock_client);

    run(
        &s,
        ApiCommand::Login(LoginRequest {
            email: "user@example.com".to_string(),
        }),
    );

    let state = s.store.get_state();
    assert_eq!(state.view_id, ViewID::Home);
    assert_eq!(state.email, "user@example.com");
    assert!(state.is_admin);
    assert!(state.error.is_none());
}

#[test]
fn handles_login_failure() {
    let mut mock_client = MockApiClient::new();
    mock_client
        .expect_login()
        .returning(|_| Err(eyre!("mock error")))
        .times(1);

    let s = setup(mock_client);

    run(
        &s,
        ApiCommand::Login(LoginRequest {
            email: "user@example.com".to_string(),
        }),
    );

    let state = s.store.get_state();
    // screen unchanged, generic message only
    assert_eq!(state.view_id, ViewID::Login);
    assert!(state.email.is_empty());
    assert_eq!(state.error.unwrap(), LOGIN_FAILED);
}

#[test]
fn handles_start_success() {
    let mut mock_client = MockApiClient::new();
    mock_client
        .expect_start_session()
        .withf(|req| req.model_key == "flash" && req.role == "Product Manager")
        .returning(|_| {
            Ok(StartResponse {
                session_id: "sess-9".to_string(),
                questions: vec![
                    "q1".to_string(),
                    "q2".to_string(),
                    "q3".to_string(),
                ],
            })
        })
        .times(1);

    let s = setup(mock_client);

    run(
        &s,
        ApiCommand::StartSession(StartRequest {
            email: "user@example.com".to_string(),
            role: "Product Manager".to_string(),
            industry: "Tech".to_string(),
            model_key: "flash".to_string(),
        }),
    );

    let state = s.store.get_state();
    assert_eq!(state.view_id, ViewID::Interview);
    assert_eq!(state.current_question, 0);
    assert_eq!(state.session.unwrap().questions.len(), 3);
}

#[test]
fn handles_start_failure() {
    let mut mock_client = MockApiClient::new();
    mock_client
        .expect_start_session()
        .returning(|_| Err(eyre!("mock error")))
        .times(1);

    let s = setup(mock_client);

    run(
        &s,
        ApiCommand::StartSession(StartRequest {
            email: "user@example.com".to_string(),
            role: "Product Manager".to_string(),
            industry: "Tech".to_string(),
            model_key: "flash".to_string(),
        }),
    );

    let state = s.store.get_state();
    assert!(state.session.is_none());
    assert_eq!(state.error.unwrap(), START_FAILED);
}

#[test]
fn handles_submit_success_retaining_answer() {
    let mut mock_client = MockApiClient::new();
    mock_client
        .expect_submit_answer()
        .withf(|req| req.session_id == "sess-9" && req.answer_text == "my answer")
        .returning(|_| {
            Ok(SubmitResponse {
                feedback: "great answer".to_string(),
            })
        })
        .times(1);

    let s = setup(mock_client);

    s.store.dispatch(Action::SessionStarted(InterviewSession {
        session_id: "sess-9".to_string(),
        questions: vec!["q1".to_string()],
    }));
    s.store
        .dispatch(Action::UpdateAnswer("my answer".to_string()));

    run(
        &s,
        ApiCommand::SubmitAnswer(SubmitRequest {
            session_id: "sess-9".to_string(),
            question: "q1".to_string(),
            answer_text: "my answer".to_string(),
        }),
    );

    let state = s.store.get_state();
    assert_eq!(state.feedback.unwrap(), "great answer");
    assert_eq!(state.answer, "my answer");
}

#[test]
fn handles_submit_failure_retaining_answer() {
    let mut mock_client = MockApiClient::new();
    mock_client
        .expect_submit_answer()
        .returning(|_| Err(eyre!("mock error")))
        .times(1);

    let s = setup(mock_client);

    s.store
        .dispatch(Action::UpdateAnswer("my answer".to_string()));

    run(
        &s,
        ApiCommand::SubmitAnswer(SubmitRequest {
            session_id: "sess-9".to_string(),
            question: "q1".to_string(),
            answer_text: "my answer".to_string(),
        }),
    );

    let state = s.store.get_state();
    assert!(state.feedback.is_none());
    assert_eq!(state.answer, "my answer");
    assert_eq!(state.error.unwrap(), SUBMIT_FAILED);
}

#[test]
fn handles_stats_success() {
    let mut mock_client = MockApiClient::new();
    mock_client
        .expect_admin_stats()
        .returning(|| {
            Ok(StatsResponse {
                users: vec![UserStats {
                    email: "a@example.com".to_string(),
                    session_count: 4,
                }],
            })
        })
        .times(1);

    let s = setup(mock_client);

    run(&s, ApiCommand::FetchStats);

    let state = s.store.get_state();
    assert_eq!(state.stats.len(), 1);
    assert_eq!(state.stats[0].session_count, 4);
}

#[test]
fn handles_stats_failure_through_uniform_error_path() {
    let mut mock_client = MockApiClient::new();
    mock_client
        .expect_admin_stats()
        .returning(|| Err(eyre!("mock error")))
        .times(1);

    let s = setup(mock_client);

    run(&s, ApiCommand::FetchStats);

    let state = s.store.get_state();
    assert!(state.stats.is_empty());
    assert_eq!(state.error.unwrap(), STATS_FAILED);
}

#[test]
fn quits_on_quit_event() {
    let mock_client = MockApiClient::new();
    let s = setup(mock_client);

    s.tx.send(Event::Quit).unwrap();
    assert!(s.handler.process_events().is_ok());
}

#[test]
fn quits_when_senders_hang_up() {
    let mock_client = MockApiClient::new();
    let s = setup(mock_client);

    drop(s.tx);
    assert!(s.handler.process_events().is_ok());
}
