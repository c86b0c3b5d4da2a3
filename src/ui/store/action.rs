//! Action types for state transitions.

use crate::api::types::UserStats;

use super::state::{InterviewSession, ModelTier, ViewID};

/// Commands that trigger state changes via the reducer.
#[derive(Debug)]
pub enum Action {
    UpdateView(ViewID),
    SetError(Option<String>),
    SetNotice(Option<String>),
    ShowPaywall,
    DismissPaywall,
    ConfirmPurchase,
    SetModelTier(ModelTier),
    UpdateProfile { role: String, industry: String },
    LoggedIn { email: String, is_admin: bool },
    SessionStarted(InterviewSession),
    UpdateAnswer(String),
    FeedbackReceived(String),
    Advance,
    StatsLoaded(Vec<UserStats>),
}
