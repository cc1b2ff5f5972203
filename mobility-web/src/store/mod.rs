//! Store module - per-user result history
//!
//! Re-exports only. All logic in submodules.

mod memory;

pub use memory::{InMemoryStore, ResultStore};
