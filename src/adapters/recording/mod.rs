//! Recording adapters that capture interactions to cassettes.

pub mod artwork_api;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;
use crate::error::IconError;

/// Record a `Result<T, IconError>` interaction using the Ok/Err JSON convention.
///
/// Errors are stored as `{"status": <u16 or null>, "message": <display>}` so a
/// replayed HTTP failure comes back as the same kind of error.
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, IconError>,
) where
    T: Serialize,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or(serde_json::Value::Null);

    let output_json = match result {
        Ok(v) => match serde_json::to_value(v) {
            Ok(inner) => serde_json::json!({ "Ok": inner }),
            Err(e) => serde_json::json!({ "Err": { "status": null, "message": e.to_string() } }),
        },
        Err(e) => serde_json::json!({ "Err": { "status": e.status(), "message": e.to_string() } }),
    };

    // A poisoned lock only means an earlier recording panicked; keep the data.
    let mut guard = recorder.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    guard.record(port, method, input_json, output_json);
}
