use std::sync::Mutex;

use crate::{
    config::Config,
    entitlement::EntitlementProvider,
    ui::colors::{Colors, Theme},
};

pub mod action;
pub mod reducer;
pub mod state;

use state::{ModelTier, ViewID};

/**
 * Manages the state of our application
 */
pub struct Store {
    state: Mutex<state::State>,
    reducer: reducer::Reducer,
}

impl Store {
    pub fn new(config: Config, entitlement: Box<dyn EntitlementProvider>) -> Self {
        let true_color_enabled = match supports_color::on(supports_color::Stream::Stdout) {
            Some(support) => support.has_16m,
            _ => false,
        };

        let theme = Theme::from_string(&config.theme);
        let colors = Colors::new(theme.to_palette(true_color_enabled), true_color_enabled);
        let entitled = entitlement.is_entitled();

        Self {
            reducer: reducer::Reducer::new(entitlement),
            state: Mutex::new(state::State {
                true_color_enabled,
                view_id: ViewID::Login,
                error: None,
                notice: None,
                show_paywall: false,
                email: String::new(),
                is_admin: false,
                entitled,
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
            }),
        }
    }

    pub fn dispatch(&self, action: action::Action) {
        let mut prev_state = self.state.lock().unwrap();
        let new_state = self.reducer.reduce(prev_state.clone(), action);
        *prev_state = new_state;
    }

    pub fn get_state(&self) -> state::State {
        self.state.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[path = "./store/store_tests.rs"]
mod tests;
