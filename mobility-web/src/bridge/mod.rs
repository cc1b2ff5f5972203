//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod exports;
mod requests;

pub use exports::{
    // WASM entry points
    submit_frames,
    get_results,
    assess_user,
    delete_user,
    drop_results,
    list_exercises,
    // Internal API
    handle_submission,
    handle_results,
    handle_assessment,
    handle_delete_user,
    handle_drop_results,
    handle_list_exercises,
};

pub use requests::{
    parse_request,
    AssessmentRequest,
    ExerciseListResponse,
    ExerciseSummary,
    MessageResponse,
    ResultsResponse,
    SubmissionMeta,
    SubmissionRequest,
    SubmissionResponse,
    UserRequest,
};
