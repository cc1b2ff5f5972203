//! Exercise registry - loaded once, read-only afterwards
//!
//! The built-in table ships as `assets/exercises.json` and is parsed on first
//! use. Callers with their own table can build a registry with `from_json`.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use super::exercise::ExerciseDefinition;
use crate::error::{EngineError, EngineResult};

const BUILTIN_EXERCISES: &str = include_str!("../../assets/exercises.json");

#[derive(Deserialize)]
struct RegistryFile {
    exercises: Vec<ExerciseDefinition>,
}

/// Exercise id -> definition
#[derive(Clone, Debug)]
pub struct ExerciseRegistry {
    exercises: Vec<ExerciseDefinition>,
    index: HashMap<String, usize>,
}

static BUILTIN: OnceLock<ExerciseRegistry> = OnceLock::new();

impl ExerciseRegistry {
    /// Validate and index a list of definitions
    pub fn new(exercises: Vec<ExerciseDefinition>) -> EngineResult<Self> {
        let mut index = HashMap::with_capacity(exercises.len());
        for (position, exercise) in exercises.iter().enumerate() {
            exercise.validate()?;
            if index.insert(exercise.id.clone(), position).is_some() {
                return Err(EngineError::config(format!(
                    "exercise '{}' defined twice",
                    exercise.id
                )));
            }
        }
        Ok(Self { exercises, index })
    }

    /// Parse `{"exercises": [...]}`
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let file: RegistryFile = serde_json::from_str(json)
            .map_err(|e| EngineError::config(format!("exercise table: {e}")))?;
        Self::new(file.exercises)
    }

    /// The registry compiled into the crate
    pub fn builtin() -> &'static ExerciseRegistry {
        BUILTIN.get_or_init(|| match Self::from_json(BUILTIN_EXERCISES) {
            Ok(registry) => registry,
            // The asset is covered by tests; a broken build is a programming error
            Err(err) => panic!("built-in exercise table is invalid: {err}"),
        })
    }

    /// Look up an exercise; unknown ids are a caller error
    pub fn get(&self, id: &str) -> EngineResult<&ExerciseDefinition> {
        self.index
            .get(id)
            .map(|&position| &self.exercises[position])
            .ok_or_else(|| EngineError::unknown_exercise(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Exercise ids in table order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.exercises.iter().map(|e| e.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExerciseDefinition> {
        self.exercises.iter()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
