//! Optimistic expectation on a stored status value.

use crate::error::{DomainError, DomainResult};

/// What the caller believes the stored status to be when it validated a change.
///
/// The order store compares this against the status it actually holds right
/// before committing, so two concurrent updates cannot both pass validation
/// against the same stale value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedStatus<S> {
    /// Skip the check (migrations, administrative overrides).
    Any,
    /// Require the stored status to equal this value.
    Exact(S),
}

impl<S: PartialEq + core::fmt::Debug> ExpectedStatus<S> {
    pub fn matches(&self, actual: &S) -> bool {
        match self {
            ExpectedStatus::Any => true,
            ExpectedStatus::Exact(expected) => expected == actual,
        }
    }

    pub fn check(&self, actual: &S) -> DomainResult<()> {
        if self.matches(actual) {
            return Ok(());
        }

        tracing::debug!(
            expected = ?self,
            actual = ?actual,
            "stored status changed underneath caller"
        );
        Err(DomainError::conflict(format!(
            "status check failed (expected: {self:?}, actual: {actual:?})"
        )))
    }
}
