//! Replaying adapters that serve recorded interactions from cassettes.

pub mod artwork_api;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

/// An error read back from a cassette.
#[derive(Debug)]
pub(crate) struct ReplayedError {
    /// HTTP status, when the recorded failure was a response.
    pub status: Option<u16>,
    /// Display form of the recorded error.
    pub message: String,
}

/// Retrieve the next recorded output for a given port and method.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, ReplayedError> {
    let mut guard = replayer.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    guard
        .next_interaction(port, method)
        .map(|i| i.output.clone())
        .map_err(|message| ReplayedError { status: None, message })
}

/// Deserialize a replayed output as `Result<T, ReplayedError>`.
///
/// Accepts `{"Ok": v}`, `{"Err": {"status": .., "message": ..}}`,
/// `{"Err": "message"}`, or a bare value.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, ReplayedError> {
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        let status = err_val
            .get("status")
            .and_then(serde_json::Value::as_u64)
            .and_then(|s| u16::try_from(s).ok());
        let message = err_val
            .get("message")
            .and_then(serde_json::Value::as_str)
            .or_else(|| err_val.as_str())
            .unwrap_or("replayed error")
            .to_string();
        return Err(ReplayedError { status, message });
    }
    let value = match output.get("Ok").or_else(|| output.get("ok")) {
        Some(ok_val) => ok_val.clone(),
        None => output,
    };
    serde_json::from_value(value)
        .map_err(|e| ReplayedError { status: None, message: format!("Bad cassette entry: {e}") })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_value_unwrapped() {
        let v: serde_json::Value = replay_result(json!({"Ok": {"a": 1}})).unwrap();
        assert_eq!(v["a"], 1);
    }

    #[test]
    fn structured_err_keeps_status() {
        let err = replay_result::<serde_json::Value>(
            json!({"Err": {"status": 404, "message": "gone"}}),
        )
        .unwrap_err();
        assert_eq!(err.status, Some(404));
        assert_eq!(err.message, "gone");
    }

    #[test]
    fn string_err_has_no_status() {
        let err = replay_result::<serde_json::Value>(json!({"Err": "boom"})).unwrap_err();
        assert_eq!(err.status, None);
        assert_eq!(err.message, "boom");
    }

    #[test]
    fn bare_value_accepted() {
        let v: u32 = replay_result(json!(5)).unwrap();
        assert_eq!(v, 5);
    }
}
