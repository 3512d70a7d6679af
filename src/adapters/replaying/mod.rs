//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_generator;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::LuminaError;

/// Retrieve the next recorded output for a given port and method.
///
/// # Panics
///
/// Panics if the cassette has no more interactions for the pair.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_interaction(port, method).output.clone()
}

/// Deserialize a replayed output recorded in the Ok/Err JSON convention.
///
/// `Err` entries carry only the failure's display message; they replay as
/// service errors with that message.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, LuminaError> {
    if let Some(err_val) = output.get("Err") {
        let message = err_val.as_str().unwrap_or("replayed error").to_string();
        return Err(LuminaError::Service { status: 0, message });
    }
    let ok_val = output.get("Ok").cloned().unwrap_or(output);
    serde_json::from_value(ok_val).map_err(|e| {
        LuminaError::Config(format!("Malformed cassette output: {e}"))
    })
}
