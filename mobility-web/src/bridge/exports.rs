//! JS entry points
//!
//! Every export takes a JSON string and returns a JSON string. The
//! `handle_*` functions do the work against any service and are what the
//! tests drive; the `#[wasm_bindgen]` wrappers run them on the module's
//! single in-memory service.

use std::cell::RefCell;

use log::warn;
use wasm_bindgen::prelude::*;

use crate::error::{EngineError, EngineResult};
use crate::registry::ExerciseRegistry;
use crate::service::MobilityService;
use crate::store::{InMemoryStore, ResultStore};
use super::requests::{
    parse_request, AssessmentRequest, ExerciseListResponse, ExerciseSummary, MessageResponse,
    ResultsResponse, SubmissionRequest, SubmissionResponse, UserRequest,
};

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SERVICE: RefCell<MobilityService<InMemoryStore>> =
        RefCell::new(MobilityService::new(InMemoryStore::new()));
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Score a `SubmissionRequest`, answer with a `SubmissionResponse`
pub fn handle_submission<S: ResultStore>(
    service: &mut MobilityService<S>,
    body: &str,
) -> EngineResult<String> {
    let request: SubmissionRequest = parse_request(body)?;
    request.validate()?;
    let result = service.submit(
        &request.user_uuid,
        &request.meta.exercise_type,
        request.meta.frame_shape,
        &request.content,
    )?;
    Ok(serde_json::to_string(&SubmissionResponse::from(&result))?)
}

/// Stored results of the user named in a `UserRequest`
pub fn handle_results<S: ResultStore>(service: &MobilityService<S>, body: &str) -> EngineResult<String> {
    let request: UserRequest = parse_request(body)?;
    request.validate()?;
    let exercises = service
        .results(&request.user_uuid)?
        .iter()
        .map(ExerciseSummary::from)
        .collect();
    let response = ResultsResponse { user_uuid: request.user_uuid, exercises };
    Ok(serde_json::to_string(&response)?)
}

/// Assessment summary for an `AssessmentRequest`
pub fn handle_assessment<S: ResultStore>(
    service: &MobilityService<S>,
    body: &str,
) -> EngineResult<String> {
    let request: AssessmentRequest = parse_request(body)?;
    request.validate()?;
    let summary = service.assess(&request.user_uuid, &request.assessment)?;
    Ok(serde_json::to_string(&summary)?)
}

pub fn handle_delete_user<S: ResultStore>(
    service: &mut MobilityService<S>,
    body: &str,
) -> EngineResult<String> {
    let request: UserRequest = parse_request(body)?;
    request.validate()?;
    let message = if service.delete_user(&request.user_uuid)? {
        "deleted"
    } else {
        "user not found"
    };
    Ok(serde_json::to_string(&MessageResponse::new(message))?)
}

pub fn handle_drop_results<S: ResultStore>(
    service: &mut MobilityService<S>,
    body: &str,
) -> EngineResult<String> {
    let request: UserRequest = parse_request(body)?;
    request.validate()?;
    let message = if service.clear_results(&request.user_uuid)? {
        "results dropped"
    } else {
        "no results found"
    };
    Ok(serde_json::to_string(&MessageResponse::new(message))?)
}

pub fn handle_list_exercises(registry: &ExerciseRegistry) -> EngineResult<String> {
    let response = ExerciseListResponse { exercises: registry.iter().collect() };
    Ok(serde_json::to_string(&response)?)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

fn reject(err: EngineError) -> JsValue {
    if err.is_request_error() {
        warn!("request rejected: {}", err);
    } else {
        log::error!("request failed: {}", err);
    }
    err.into()
}

/// `SubmissionRequest` JSON in, `SubmissionResponse` JSON out
#[wasm_bindgen(js_name = submitFrames)]
pub fn submit_frames(body: &str) -> Result<String, JsValue> {
    SERVICE
        .with(|cell| handle_submission(&mut *cell.borrow_mut(), body))
        .map_err(reject)
}

#[wasm_bindgen(js_name = getResults)]
pub fn get_results(body: &str) -> Result<String, JsValue> {
    SERVICE
        .with(|cell| handle_results(&*cell.borrow(), body))
        .map_err(reject)
}

#[wasm_bindgen(js_name = assessUser)]
pub fn assess_user(body: &str) -> Result<String, JsValue> {
    SERVICE
        .with(|cell| handle_assessment(&*cell.borrow(), body))
        .map_err(reject)
}

#[wasm_bindgen(js_name = deleteUser)]
pub fn delete_user(body: &str) -> Result<String, JsValue> {
    SERVICE
        .with(|cell| handle_delete_user(&mut *cell.borrow_mut(), body))
        .map_err(reject)
}

#[wasm_bindgen(js_name = dropResults)]
pub fn drop_results(body: &str) -> Result<String, JsValue> {
    SERVICE
        .with(|cell| handle_drop_results(&mut *cell.borrow_mut(), body))
        .map_err(reject)
}

/// Built-in exercise table
#[wasm_bindgen(js_name = listExercises)]
pub fn list_exercises() -> Result<String, JsValue> {
    handle_list_exercises(ExerciseRegistry::builtin()).map_err(reject)
}
