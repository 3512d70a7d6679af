//! Live adapter for the Gemini image generation API.

use reqwest::Client;
use serde::Deserialize;

use crate::error::LuminaError;
use crate::ports::image_generator::{
    GenerateFuture, GenerationRequest, ImageGenerator, ServiceResponse,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Fallback when the service returns an error body we cannot interpret.
const GENERIC_FAILURE: &str = "Image generation request failed.";

/// Live Gemini image generator that calls the Google AI API.
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
}

impl GeminiGenerator {
    /// Create a new Gemini generator with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { client: Client::new(), api_key }
    }
}

impl ImageGenerator for GeminiGenerator {
    fn generate(&self, request: &GenerationRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let url = format!("{GEMINI_API_BASE}/{}:generateContent", request.model);

            let body = serde_json::json!({
                "contents": [{
                    "parts": [{"text": request.prompt}]
                }],
                "generationConfig": {
                    "responseModalities": ["IMAGE"],
                    "imageConfig": {
                        "aspectRatio": request.aspect_ratio,
                    }
                }
            });

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            let response_text = response.text().await?;

            if !status.is_success() {
                return Err(LuminaError::Service {
                    status: status.as_u16(),
                    message: error_message(&response_text),
                });
            }

            // The candidate/part structure is handed to the controller as-is;
            // its first-match scan depends on the service's ordering.
            let parsed: ServiceResponse = serde_json::from_str(&response_text).map_err(|e| {
                LuminaError::Service {
                    status: 200,
                    message: format!("Failed to parse response: {e}"),
                }
            })?;

            Ok(parsed)
        })
    }
}

/// Pull the human-readable message out of a Gemini error body.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.trim().is_empty() => parsed.error.message,
        _ => GENERIC_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_extracted_from_body() {
        let body = r#"{"error": {"code": 429, "message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(error_message(body), "quota exceeded");
    }

    #[test]
    fn error_message_falls_back_on_garbage() {
        assert_eq!(error_message("<html>503</html>"), GENERIC_FAILURE);
        assert_eq!(error_message(""), GENERIC_FAILURE);
    }

    #[test]
    fn error_message_falls_back_on_blank_message() {
        let body = r#"{"error": {"message": "   "}}"#;
        assert_eq!(error_message(body), GENERIC_FAILURE);
    }
}
