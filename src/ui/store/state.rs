//! Application state definitions.

use core::fmt;

use crate::{api::types::UserStats, config::Config, ui::colors::Colors};

#[cfg(test)]
use crate::ui::colors::Theme;

/// Identifies the currently active screen.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ViewID {
    Login,
    Home,
    Interview,
    Admin,
}

impl fmt::Display for ViewID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Selector for which question/feedback engine the backend should use.
/// The engine itself is external - only the wire key matters here.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ModelTier {
    Standard,
    Pro,
}

impl ModelTier {
    /// The key the backend expects in start requests.
    pub fn key(&self) -> &'static str {
        match self {
            ModelTier::Standard => "flash",
            ModelTier::Pro => "pro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelTier::Standard => "Standard (Free)",
            ModelTier::Pro => "Pro (Premium)",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ModelTier::Standard => ModelTier::Pro,
            ModelTier::Pro => ModelTier::Standard,
        }
    }
}

/// Question sequence and correlation token issued by the backend at
/// interview start. Immutable once stored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InterviewSession {
    pub session_id: String,
    pub questions: Vec<String>,
}

/// Complete application state for the terminal UI. Process-local and
/// discarded on exit.
#[derive(Debug, Clone)]
pub struct State {
    pub true_color_enabled: bool,
    pub view_id: ViewID,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub show_paywall: bool,
    pub email: String,
    pub is_admin: bool,
    pub entitled: bool,
    pub role: String,
    pub industry: String,
    pub tier: ModelTier,
    pub session: Option<InterviewSession>,
    pub current_question: usize,
    pub answer: String,
    pub feedback: Option<String>,
    pub stats: Vec<UserStats>,
    pub config: Config,
    pub colors: Colors,
}

impl State {
    /// The question currently being answered, if an interview is running.
    pub fn current_question_text(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.questions.get(self.current_question))
            .map(|q| q.as_str())
    }
}

#[cfg(test)]
impl State {
    pub fn default() -> Self {
        let config = Config::new();
        let theme = Theme::from_string(&config.theme);
        let true_color_enabled = true;
        let colors = Colors::new(theme.to_palette(true_color_enabled), true_color_enabled);

        Self {
            true_color_enabled,
            view_id: ViewID::Login,
            error: None,
            notice: None,
            show_paywall: false,
            email: String::new(),
            is_admin: false,
            entitled: false,
            role: String::from("Product Manager"),
            industry: String::from("Tech"),
            tier: ModelTier::Standard,
            session: None,
            current_question: 0,
            answer: String::new(),
            feedback: None,
            stats: Vec::new(),
            config,
            colors,
        }
    }
}
