//! Mobility service - submissions, history and assessments for many users
//!
//! Owns a `ResultStore` and reads the exercise registry and assessment
//! templates. The JS bridge keeps one instance per wasm module; native hosts
//! can plug their own store.

use std::collections::BTreeMap;

use log::debug;

use crate::assessment::{self, apply_aliases, AssessmentSummary, TemplateCatalog};
use crate::error::{EngineError, EngineResult};
use crate::pose::{Frame, FrameShape};
use crate::registry::ExerciseRegistry;
use crate::scoring::{evaluate_skip, reduce, ExerciseResult};
use crate::store::ResultStore;

pub struct MobilityService<S: ResultStore> {
    store: S,
    registry: &'static ExerciseRegistry,
    templates: &'static TemplateCatalog,
}

impl<S: ResultStore> MobilityService<S> {
    /// Service over the built-in registry and templates
    pub fn new(store: S) -> Self {
        Self::with_config(store, ExerciseRegistry::builtin(), TemplateCatalog::builtin())
    }

    pub fn with_config(
        store: S,
        registry: &'static ExerciseRegistry,
        templates: &'static TemplateCatalog,
    ) -> Self {
        Self { store, registry, templates }
    }

    pub fn registry(&self) -> &'static ExerciseRegistry {
        self.registry
    }

    pub fn templates(&self) -> &'static TemplateCatalog {
        self.templates
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Score one submission and record it.
    ///
    /// The skip flag of a non-degenerate result reflects every sample stored
    /// for `(user, exercise)` plus the ones submitted now.
    pub fn submit(
        &mut self,
        user: &str,
        exercise: &str,
        shape: FrameShape,
        frames: &[Frame],
    ) -> EngineResult<ExerciseResult> {
        if user.is_empty() {
            return Err(EngineError::invalid_request("userUUID is empty"));
        }
        if !shape.is_valid() {
            return Err(EngineError::invalid_request(format!(
                "frame_shape must be non-zero, got {}x{}",
                shape.width, shape.height
            )));
        }
        let definition = self.registry.get(exercise)?;

        let mut result = reduce(frames, shape, definition);
        if !result.is_degenerate() {
            let history = self.store.history(user, exercise)?;
            let angles = history
                .iter()
                .chain(std::iter::once(&result))
                .flat_map(|r| r.top_angles.iter().map(|s| s.angle));
            result.skip = evaluate_skip(angles, definition.angle_min);
            debug!(
                "{}/{}: {} earlier submissions, skip={}",
                user,
                exercise,
                history.len(),
                result.skip
            );
        }

        self.store.append(user, result.clone())?;
        Ok(result)
    }

    /// Every stored result of `user`, oldest first
    pub fn results(&self, user: &str) -> EngineResult<Vec<ExerciseResult>> {
        self.store.results(user)
    }

    /// Latest non-skipped best angle per exercise id, ids as submitted
    pub fn best_angles(&self, user: &str) -> EngineResult<BTreeMap<String, f64>> {
        let mut best = BTreeMap::new();
        for result in self.store.results(user)? {
            if !result.skip {
                best.insert(result.exercise, result.best_angle);
            }
        }
        Ok(best)
    }

    pub fn assess(&self, user: &str, template: &str) -> EngineResult<AssessmentSummary> {
        let template = self.templates.get(template)?;
        let best = apply_aliases(self.best_angles(user)?);
        Ok(assessment::assess(&best, template))
    }

    pub fn delete_user(&mut self, user: &str) -> EngineResult<bool> {
        self.store.delete_user(user)
    }

    pub fn clear_results(&mut self, user: &str) -> EngineResult<bool> {
        self.store.clear_results(user)
    }
}
