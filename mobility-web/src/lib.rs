//! Mobility Web - joint mobility scoring from 2D pose keypoints
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Frames of COCO-17 keypoints go in, one scored `ExerciseResult` per
//! submission comes out; stored results feed body-part assessments.

pub mod angles;
pub mod assessment;
pub mod bridge;
pub mod error;
pub mod pose;
pub mod registry;
pub mod scoring;
pub mod service;
pub mod store;

use wasm_bindgen::prelude::*;

pub use error::{EngineError, EngineResult};
pub use pose::{Frame, FrameShape, Keypoint, Side};
pub use registry::{ExerciseDefinition, ExerciseRegistry, RiskLevel, RiskRanges};
pub use scoring::{reduce, AngleSample, ExerciseResult};
pub use assessment::{assess, AssessmentSummary, TemplateCatalog};
pub use service::MobilityService;
pub use store::{InMemoryStore, ResultStore};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console.
///
/// `level` is one of "trace", "debug", "info", "warn", "error"; anything
/// else means "info".
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = level.trim().parse::<log::Level>().unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("mobility-web {} logging at {}", env!("CARGO_PKG_VERSION"), log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
