//! Image generator port for the generative-image API.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::LuminaError;

/// A request to generate one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The model identifier (e.g., `"gemini-2.5-flash-image"`).
    pub model: String,
    /// The augmented prompt (user text plus the style/quality suffix).
    pub prompt: String,
    /// Aspect ratio shape hint (e.g., `"1:1"`, `"16:9"`).
    pub aspect_ratio: String,
}

/// The service response: zero or more candidates.
///
/// Candidate and part ordering is preserved exactly as the service returned
/// it; the controller's first-match scan depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// Independent outputs produced for the request.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One independent output produced by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// The candidate's content.
    #[serde(default)]
    pub content: CandidateContent,
}

/// Content of a candidate: an ordered list of parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateContent {
    /// Content fragments, in service order.
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

/// A content fragment; may carry text or inline binary data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPart {
    /// Text content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline base64-encoded data, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded bytes embedded directly in a response part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type reported by the service.
    pub mime_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

/// Boxed future type returned by [`ImageGenerator::generate`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ServiceResponse, LuminaError>> + Send + 'a>>;

/// Issues generation requests to an external image service.
pub trait ImageGenerator: Send + Sync {
    /// Run one request to completion and return the raw service response.
    fn generate(&self, request: &GenerationRequest) -> GenerateFuture<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_round_trip() {
        let request = GenerationRequest {
            model: "gemini-2.5-flash-image".into(),
            prompt: "a cat, in Anime style, high quality, detailed, 8k resolution".into(),
            aspect_ratio: "1:1".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: GenerationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.model, "gemini-2.5-flash-image");
        assert_eq!(deserialized.aspect_ratio, "1:1");
    }

    #[test]
    fn response_parses_wire_camel_case() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here is your image"},
                        {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
                    ]
                }
            }]
        }"#;
        let response: ServiceResponse = serde_json::from_str(json).unwrap();
        let parts = &response.candidates[0].content.parts;
        assert_eq!(parts.len(), 2);
        assert!(parts[0].inline_data.is_none());
        let inline = parts[1].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "AAAA");
    }

    #[test]
    fn response_with_no_candidates_parses() {
        let response: ServiceResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn candidate_with_no_parts_parses() {
        let json = r#"{"candidates": [{"content": {}}]}"#;
        let response: ServiceResponse = serde_json::from_str(json).unwrap();
        assert!(response.candidates[0].content.parts.is_empty());
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = ServiceResponse {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![ContentPart {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: "image/png".into(),
                            data: "QUJD".into(),
                        }),
                    }],
                },
            }],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("inlineData"));
        assert!(json.contains("mimeType"));
    }
}
