//! Persisted state container shared by the mood and wellness services

use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, Persisted, StateRepository};
use chrono::NaiveDate;

/// Owns one state blob and keeps it in step with its stored copy.
///
/// Every change goes through [`Store::commit`]: the mutation runs on a copy,
/// the copy is written, and only then does it replace the live state. Readers
/// never see a half-applied change, and a failed write leaves the live state
/// exactly as it was on disk.
#[derive(Debug)]
pub struct Store<S: Persisted> {
    repository: FileSystemRepository,
    state: S,
}

impl<S: Persisted> Store<S> {
    /// Rehydrate the stored state, or start from the initial state
    pub fn open(repository: FileSystemRepository, today: NaiveDate) -> Result<Self> {
        let state = match repository.load_state::<S>()? {
            Some(state) => state,
            None => S::initial(today),
        };
        Ok(Store { repository, state })
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Apply `mutate` and persist the result
    pub fn commit<T>(&mut self, operation: &str, mutate: impl FnOnce(&mut S) -> T) -> Result<T> {
        let mut next = self.state.clone();
        let output = mutate(&mut next);

        if next == self.state {
            tracing::trace!(storage = S::STORAGE_NAME, operation, "no change to persist");
            return Ok(output);
        }

        if let Err(e) = self.repository.save_state(&next) {
            tracing::error!(
                storage = S::STORAGE_NAME,
                operation,
                error = %e,
                "failed to persist state; change discarded"
            );
            return Err(e);
        }

        self.state = next;
        tracing::debug!(storage = S::STORAGE_NAME, operation, "state persisted");
        Ok(output)
    }
}
