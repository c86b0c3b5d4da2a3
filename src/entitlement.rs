//! Entitlement checking for the premium model tier.

use color_eyre::eyre::Result;
use std::sync::atomic::{AtomicBool, Ordering};

/// Capability seam for premium entitlement so a real purchase-verification
/// implementation can be substituted without touching UI logic. Until one
/// exists, entitlement is untrusted client-only state.
#[cfg_attr(test, mockall::automock)]
pub trait EntitlementProvider: Send + Sync {
    /// Whether the user currently holds the premium entitlement.
    fn is_entitled(&self) -> bool;
    /// Completes a purchase and returns the resulting entitlement.
    fn purchase(&self) -> Result<bool>;
}

/// Placeholder provider that grants the entitlement unconditionally on
/// purchase. Nothing is verified server-side and nothing is persisted -
/// entitlement is lost on exit.
#[derive(Default)]
pub struct SimulatedEntitlement {
    granted: AtomicBool,
}

impl EntitlementProvider for SimulatedEntitlement {
    fn is_entitled(&self) -> bool {
        self.granted.load(Ordering::Relaxed)
    }

    fn purchase(&self) -> Result<bool> {
        log::debug!("simulated purchase confirmed");
        self.granted.store(true, Ordering::Relaxed);
        Ok(true)
    }
}

#[cfg(test)]
#[path = "./entitlement_tests.rs"]
mod tests;
