//! Result persistence
//!
//! Each submission appends one `ExerciseResult` row for its user. Rows are
//! never rewritten; skip evaluation reads the whole `(user, exercise)`
//! history back.

use std::collections::BTreeMap;

use log::info;

use crate::error::EngineResult;
use crate::scoring::ExerciseResult;

/// Append-only store of per-user exercise results
pub trait ResultStore {
    /// Record one submission
    fn append(&mut self, user: &str, result: ExerciseResult) -> EngineResult<()>;

    /// Every result of `user` in submission order
    fn results(&self, user: &str) -> EngineResult<Vec<ExerciseResult>>;

    /// Results of `user` for one exercise, in submission order
    fn history(&self, user: &str, exercise: &str) -> EngineResult<Vec<ExerciseResult>> {
        Ok(self
            .results(user)?
            .into_iter()
            .filter(|r| r.exercise == exercise)
            .collect())
    }

    /// Forget the user entirely. `false` if no result rows were removed.
    fn delete_user(&mut self, user: &str) -> EngineResult<bool>;

    /// Drop the user's results but keep the user. `false` if there were none.
    fn clear_results(&mut self, user: &str) -> EngineResult<bool>;
}

/// Store held in memory, one per wasm instance or test
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: BTreeMap<String, Vec<ExerciseResult>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users with at least one stored row or a cleared history
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }
}

impl ResultStore for InMemoryStore {
    fn append(&mut self, user: &str, result: ExerciseResult) -> EngineResult<()> {
        info!("store: {} +{} (skip={})", user, result.exercise, result.skip);
        self.rows.entry(user.to_string()).or_default().push(result);
        Ok(())
    }

    fn results(&self, user: &str) -> EngineResult<Vec<ExerciseResult>> {
        Ok(self.rows.get(user).cloned().unwrap_or_default())
    }

    fn history(&self, user: &str, exercise: &str) -> EngineResult<Vec<ExerciseResult>> {
        Ok(self
            .rows
            .get(user)
            .map(|rows| rows.iter().filter(|r| r.exercise == exercise).cloned().collect())
            .unwrap_or_default())
    }

    fn delete_user(&mut self, user: &str) -> EngineResult<bool> {
        let removed = self
            .rows
            .remove(user)
            .is_some_and(|rows| !rows.is_empty());
        if removed {
            info!("store: deleted user {}", user);
        }
        Ok(removed)
    }

    fn clear_results(&mut self, user: &str) -> EngineResult<bool> {
        let Some(rows) = self.rows.get_mut(user) else {
            return Ok(false);
        };
        let cleared = !rows.is_empty();
        rows.clear();
        if cleared {
            info!("store: cleared results of {}", user);
        }
        Ok(cleared)
    }
}
