//! Run control for unbounded search loops
//!
//! Frontier search and both exact TSP solvers have worst-case
//! exponential frontiers, so every one of their loops checks a
//! [`RunControl`] once per expansion: a cooperative cancellation token
//! (the CLI trips it from a Ctrl-C handler), an optional wall-clock
//! deadline, and an optional cap on expansions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::error::{Result, SendaError};

/// Cooperative cancellation flag shared between a solver and its caller.
///
/// Cloning is cheap; all clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Safe to call from a signal handler thread.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Limits threaded through each search loop, checked once per expansion
#[derive(Debug, Clone, Default)]
pub struct RunControl {
    /// Cancellation flag; `None` means the run cannot be cancelled
    pub cancel: Option<CancellationToken>,
    /// Absolute wall-clock deadline
    pub deadline: Option<Instant>,
    /// Maximum number of node expansions before giving up
    pub max_expansions: Option<usize>,
}

impl RunControl {
    /// An unrestricted run: never cancelled, no deadline, no cap
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Check all limits against the number of expansions performed so far.
    /// Called once per expansion step by every unbounded solver loop.
    pub fn check(&self, expanded: usize) -> Result<()> {
        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                return Err(SendaError::Cancelled);
            }
        }

        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(SendaError::DeadlineExceeded { expanded });
            }
        }

        if let Some(limit) = self.max_expansions {
            if expanded >= limit {
                return Err(SendaError::ExpansionLimitExceeded { limit });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unbounded_never_trips() {
        let control = RunControl::unbounded();
        assert!(control.check(0).is_ok());
        assert!(control.check(1_000_000).is_ok());
    }

    #[test]
    fn test_cancellation_observed_by_clones() {
        let token = CancellationToken::new();
        let control = RunControl::unbounded().with_cancel(token.clone());

        assert!(control.check(0).is_ok());
        token.cancel();
        assert!(matches!(control.check(0), Err(SendaError::Cancelled)));
    }

    #[test]
    fn test_expansion_limit() {
        let control = RunControl::unbounded().with_max_expansions(10);
        assert!(control.check(9).is_ok());
        assert!(matches!(
            control.check(10),
            Err(SendaError::ExpansionLimitExceeded { limit: 10 })
        ));
    }

    #[test]
    fn test_elapsed_deadline() {
        let control =
            RunControl::unbounded().with_deadline(Instant::now() - Duration::from_secs(1));
        assert!(matches!(
            control.check(5),
            Err(SendaError::DeadlineExceeded { expanded: 5 })
        ));
    }
}
