//! Image request controller: request lifecycle and observable state.
//!
//! Owns the one-at-a-time generation cycle: validate the prompt, build the
//! augmented request, call the generator port, extract the first
//! image-bearing part from the response, and publish the outcome.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use base64::Engine;

use crate::error::LuminaError;
use crate::output;
use crate::params::{augment_prompt, AspectRatio, StyleTag};
use crate::ports::image_generator::{GenerationRequest, ImageGenerator, ServiceResponse};

/// A displayable image produced by a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Raw image bytes (decoded from base64).
    pub data: Vec<u8>,
    /// MIME type of the published payload; always `image/png`.
    pub mime_type: String,
}

/// Observable lifecycle state of the controller.
///
/// Driven solely by the single outstanding request; a new submission
/// supersedes any prior `Succeeded`/`Failed` result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    /// No request has completed and none is outstanding.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The last request produced an image.
    Succeeded(GeneratedImage),
    /// The last request failed; carries the user-facing message.
    Failed(String),
}

/// Outcome of an accepted [`Controller::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The prompt was blank after trimming; no request was issued.
    Skipped,
    /// A request ran to completion and produced an image.
    Generated(GeneratedImage),
}

/// Drives generation requests against an [`ImageGenerator`] port.
pub struct Controller {
    generator: Box<dyn ImageGenerator>,
    model: String,
    state: Mutex<UiState>,
}

impl Controller {
    /// Create a controller targeting the given model.
    #[must_use]
    pub fn new(generator: Box<dyn ImageGenerator>, model: impl Into<String>) -> Self {
        Self { generator, model: model.into(), state: Mutex::new(UiState::Idle) }
    }

    /// Snapshot of the current state.
    ///
    /// # Panics
    ///
    /// Panics if the state lock is poisoned.
    #[must_use]
    pub fn state(&self) -> UiState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    /// Submit a generation request.
    ///
    /// A prompt that is empty after trimming issues no request and returns
    /// [`Submission::Skipped`] with the state unchanged. While a request is
    /// outstanding, further calls are rejected with
    /// [`LuminaError::InFlight`] without disturbing the running request.
    /// Transport and semantic failures are recorded as `Failed(message)`
    /// and returned as errors; a produced image is recorded as
    /// `Succeeded`, replacing any prior result.
    ///
    /// # Errors
    ///
    /// Returns [`LuminaError::InFlight`] when a request is outstanding,
    /// [`LuminaError::NoImageData`] when the response carries no usable
    /// image part, or the service/transport error otherwise.
    pub async fn submit(
        &self,
        prompt: &str,
        style: StyleTag,
        aspect_ratio: AspectRatio,
    ) -> Result<Submission, LuminaError> {
        if prompt.trim().is_empty() {
            return Ok(Submission::Skipped);
        }

        {
            let mut state = self.state.lock().expect("state lock poisoned");
            if matches!(*state, UiState::Pending) {
                return Err(LuminaError::InFlight);
            }
            *state = UiState::Pending;
        }

        let request = GenerationRequest {
            model: self.model.clone(),
            prompt: augment_prompt(prompt, style),
            aspect_ratio: aspect_ratio.as_str().to_string(),
        };

        let outcome = match self.generator.generate(&request).await {
            Ok(response) => extract_image(&response),
            Err(e) => Err(e),
        };

        let mut state = self.state.lock().expect("state lock poisoned");
        match outcome {
            Ok(image) => {
                *state = UiState::Succeeded(image.clone());
                Ok(Submission::Generated(image))
            }
            Err(e) => {
                *state = UiState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Write the currently held image into `dir` under the generated
    /// download filename.
    ///
    /// With no `Succeeded` image held this is a no-op returning `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn download_to(&self, dir: &Path) -> Result<Option<PathBuf>, LuminaError> {
        let image = match self.state() {
            UiState::Succeeded(image) => image,
            _ => return Ok(None),
        };
        let path = dir.join(output::download_filename());
        output::save_image(&image.data, &path)?;
        Ok(Some(path))
    }
}

/// Extract the displayable image from a service response.
///
/// Only the first candidate is examined; its parts are scanned in order
/// and the first one carrying inline data wins. The decoded payload is
/// published as `image/png`.
fn extract_image(response: &ServiceResponse) -> Result<GeneratedImage, LuminaError> {
    let inline = response
        .candidates
        .first()
        .and_then(|candidate| {
            candidate.content.parts.iter().find_map(|part| part.inline_data.as_ref())
        })
        .ok_or(LuminaError::NoImageData)?;

    let data = base64::engine::general_purpose::STANDARD.decode(&inline.data).map_err(|e| {
        LuminaError::Service { status: 200, message: format!("Failed to decode image data: {e}") }
    })?;

    Ok(GeneratedImage { data, mime_type: "image/png".to_string() })
}
