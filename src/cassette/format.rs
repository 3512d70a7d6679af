//! On-disk cassette format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session: ordered port interactions plus provenance metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Session name.
    pub name: String,
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit the recording was made at, or `"unknown"`.
    pub commit: String,
    /// The recorded interactions, in order.
    pub interactions: Vec<Interaction>,
}

/// One recorded port call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position within the session.
    pub seq: u64,
    /// Port name (e.g., `"image_generator"`).
    pub port: String,
    /// Method name (e.g., `"generate"`).
    pub method: String,
    /// Serialized call input.
    pub input: serde_json::Value,
    /// Serialized call output, in `{"Ok": ...}` / `{"Err": "..."}` form.
    pub output: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cassette_yaml_round_trip() {
        let cassette = Cassette {
            name: "session".into(),
            recorded_at: Utc::now(),
            commit: "deadbeef".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "image_generator".into(),
                method: "generate".into(),
                input: json!({"prompt": "a cat"}),
                output: json!({"Ok": {"candidates": []}}),
            }],
        };

        let yaml = serde_yaml::to_string(&cassette).unwrap();
        let parsed: Cassette = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.name, "session");
        assert_eq!(parsed.commit, "deadbeef");
        assert_eq!(parsed.interactions.len(), 1);
        assert_eq!(parsed.interactions[0].port, "image_generator");
    }
}
