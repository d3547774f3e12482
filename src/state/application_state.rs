// src/state/application_state.rs
use tracing::{debug, info};

use crate::data::LoanApplication;

/// Supplies the loan application the rest of the deck reads. Until it is
/// submitted the application is absent.
#[derive(Debug, Clone)]
pub struct ApplicationProvider {
    application: Option<LoanApplication>,
    pending: LoanApplication,
}

impl ApplicationProvider {
    pub fn new(pending: LoanApplication, submitted: bool) -> Self {
        Self {
            application: submitted.then(|| pending.clone()),
            pending,
        }
    }

    pub fn current(&self) -> Option<&LoanApplication> {
        self.application.as_ref()
    }

    pub fn is_present(&self) -> bool {
        self.application.is_some()
    }

    pub fn submit(&mut self) {
        if self.application.is_some() {
            debug!("application already submitted");
            return;
        }
        info!(id = %self.pending.id, "application submitted");
        self.application = Some(self.pending.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent_until_submitted() {
        let mut provider = ApplicationProvider::new(LoanApplication::default(), false);
        assert!(!provider.is_present());
        assert!(provider.current().is_none());

        provider.submit();
        assert!(provider.is_present());
        assert_eq!(provider.current().map(|a| a.id.as_str()), Some("EQH-2020-0011"));
    }

    #[test]
    fn submit_is_idempotent() {
        let mut provider = ApplicationProvider::new(LoanApplication::default(), true);
        let before = provider.current().cloned();
        provider.submit();
        provider.submit();
        assert_eq!(provider.current().cloned(), before);
    }
}
