//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - the document picked by the user
//! - **API Types** - request/response bodies of the backend endpoints
//! - **Flow Types** - upload flow stages and status entries
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// A document chosen in the file picker, read fully into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the browser
    pub name: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Body sent to `POST /process-document`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionRequest {
    /// Base64 encoded file content
    pub file_content: String,
    /// Original file name
    pub file_name: String,
}

/// One unit of recognized text.
///
/// Field names follow the recognition service (PascalCase). Page blocks
/// carry no `Text`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OcrBlock {
    /// Recognized text fragment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// PAGE, LINE, WORD...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
    /// Recognition confidence (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl OcrBlock {
    /// Block with only a text fragment.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Response from `POST /process-document`.
///
/// Either `error` or `Blocks` is set. The server answers errors with a
/// 500 status but still a JSON body, so the body is what counts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "Blocks", default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<OcrBlock>>,
}

impl RecognitionResponse {
    /// Split the response into its blocks or the server-reported error.
    ///
    /// An empty `error` string does not count as an error.
    pub fn into_blocks(self) -> AppResult<Vec<OcrBlock>> {
        match self.error {
            Some(message) if !message.is_empty() => Err(AppError::Server(message)),
            _ => self
                .blocks
                .ok_or_else(|| AppError::Malformed("recognition response has no Blocks".into())),
        }
    }
}

/// Body sent to `POST /correct-text`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub text: String,
}

/// Response from `POST /correct-text`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CorrectionResponse {
    /// The corrected text, or a malformed-response error carrying whatever
    /// the server said instead.
    pub fn into_text(self) -> AppResult<String> {
        match (self.corrected_text, self.error) {
            (Some(text), _) => Ok(text),
            (None, Some(message)) => Err(AppError::Malformed(format!(
                "correction failed: {}",
                message
            ))),
            (None, None) => Err(AppError::Malformed(
                "correction response has no corrected_text".into(),
            )),
        }
    }
}

/// Body sent to `POST /evaluate-text`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The corrected answer text
    pub text: String,
    /// Question the answer responds to
    pub question: String,
}

/// Response from `POST /evaluate-text`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationResponse {
    /// The feedback, or the server-reported reason there is none.
    pub fn into_feedback(self) -> AppResult<String> {
        match (self.feedback, self.error) {
            (Some(feedback), _) => Ok(feedback),
            (None, Some(message)) if !message.is_empty() => Err(AppError::Server(message)),
            _ => Err(AppError::Malformed(
                "evaluation response has no feedback".into(),
            )),
        }
    }
}

// =============================================================================
// Flow Types
// =============================================================================

/// Where an upload flow currently is.
///
/// `Idle -> Encoding -> Recognizing -> Correcting -> Done`, or `Failed`
/// from any working stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowStage {
    Idle,
    Encoding,
    Recognizing,
    Correcting,
    Done,
    Failed,
}

impl FlowStage {
    /// Whether a request chain is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            FlowStage::Encoding | FlowStage::Recognizing | FlowStage::Correcting
        )
    }

    /// Human readable label for the status panel.
    pub fn label(&self) -> &'static str {
        match self {
            FlowStage::Idle => "Waiting for a document",
            FlowStage::Encoding => "Reading file...",
            FlowStage::Recognizing => "Extracting text...",
            FlowStage::Correcting => "Correcting text...",
            FlowStage::Done => "Done, opening results",
            FlowStage::Failed => "Processing failed",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            FlowStage::Idle => "status-idle",
            FlowStage::Encoding | FlowStage::Recognizing | FlowStage::Correcting => "status-busy",
            FlowStage::Done => "status-done",
            FlowStage::Failed => "status-failed",
        }
    }
}

/// A single line in the status panel.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusEntry {
    /// Upload run this entry belongs to, starting at 1
    pub run: u32,
    /// Unique, increasing across runs; used as the row key
    pub seq: u64,
    pub stage: FlowStage,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Generic alert text shown for anything but a server-reported error.
pub const GENERIC_ALERT: &str = "An error occurred during processing.";

/// Alert text when the backend session is missing or expired.
pub const LOGIN_ALERT: &str = "Please log in to process documents.";

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Reading the selected file failed.
    #[error("File error: {0}")]
    File(String),

    /// Network/HTTP error, including undecodable response bodies.
    #[error("Network error: {0}")]
    Network(String),

    /// The recognition endpoint reported an error.
    #[error("Server error: {0}")]
    Server(String),

    /// Response decoded but lacks the expected fields.
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Storage, navigation or DOM failure.
    #[error("Browser error: {0}")]
    Browser(String),

    /// The backend sent us to its login page instead of answering.
    #[error("Login required")]
    LoginRequired,

    /// User input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Text shown to the user in the alert dialog.
    pub fn alert_message(&self) -> String {
        match self {
            AppError::Server(message) => {
                format!("An error occurred during processing: {}", message)
            }
            AppError::LoginRequired => LOGIN_ALERT.to_string(),
            AppError::Validation(message) => message.clone(),
            _ => GENERIC_ALERT.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognition_request_field_names() {
        let request = RecognitionRequest {
            file_content: "aGk=".into(),
            file_name: "scan.png".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fileContent"], "aGk=");
        assert_eq!(json["fileName"], "scan.png");
    }

    #[test]
    fn test_recognition_response_with_blocks() {
        let json = r#"{
            "DocumentMetadata": {"Pages": 1},
            "JobStatus": "SUCCEEDED",
            "Blocks": [
                {"BlockType": "PAGE", "Id": "p1"},
                {"BlockType": "LINE", "Text": "Hello", "Confidence": 99.1},
                {"BlockType": "WORD", "Text": "world"}
            ]
        }"#;

        let response: RecognitionResponse = serde_json::from_str(json).unwrap();
        let blocks = response.into_blocks().unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].text, None);
        assert_eq!(blocks[1].text.as_deref(), Some("Hello"));
        assert_eq!(blocks[1].block_type.as_deref(), Some("LINE"));
    }

    #[test]
    fn test_recognition_response_error() {
        let response: RecognitionResponse =
            serde_json::from_str(r#"{"error": "AWS credentials not found or incomplete."}"#).unwrap();
        let err = response.into_blocks().unwrap_err();
        assert_eq!(err, AppError::Server("AWS credentials not found or incomplete.".into()));
        assert_eq!(
            err.alert_message(),
            "An error occurred during processing: AWS credentials not found or incomplete."
        );
    }

    #[test]
    fn test_empty_error_string_is_not_an_error() {
        let response: RecognitionResponse =
            serde_json::from_str(r#"{"error": "", "Blocks": [{"Text": "ok"}]}"#).unwrap();
        assert_eq!(response.into_blocks().unwrap(), vec![OcrBlock::with_text("ok")]);
    }

    #[test]
    fn test_missing_blocks_is_malformed() {
        let response: RecognitionResponse = serde_json::from_str("{}").unwrap();
        let err = response.into_blocks().unwrap_err();
        assert!(matches!(err, AppError::Malformed(_)));
        assert_eq!(err.alert_message(), GENERIC_ALERT);
    }

    #[test]
    fn test_correction_response() {
        let ok: CorrectionResponse =
            serde_json::from_str(r#"{"corrected_text": "Fixed text"}"#).unwrap();
        assert_eq!(ok.into_text().unwrap(), "Fixed text");

        let rejected: CorrectionResponse =
            serde_json::from_str(r#"{"error": "No text provided"}"#).unwrap();
        let err = rejected.into_text().unwrap_err();
        assert!(err.to_string().contains("No text provided"));
        // Correction failures never leak the server message to the user
        assert_eq!(err.alert_message(), GENERIC_ALERT);
    }

    #[test]
    fn test_evaluation_response() {
        let request = EvaluationRequest {
            text: "<p>Answer</p>".into(),
            question: "Discuss federalism.".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["text"], "<p>Answer</p>");
        assert_eq!(json["question"], "Discuss federalism.");

        let ok: EvaluationResponse =
            serde_json::from_str(r#"{"feedback": "Good structure"}"#).unwrap();
        assert_eq!(ok.into_feedback().unwrap(), "Good structure");

        let rejected: EvaluationResponse =
            serde_json::from_str(r#"{"error": "No text or question provided"}"#).unwrap();
        assert_eq!(
            rejected.into_feedback().unwrap_err(),
            AppError::Server("No text or question provided".into())
        );

        let empty: EvaluationResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(empty.into_feedback(), Err(AppError::Malformed(_))));
    }

    #[test]
    fn test_alert_messages_by_kind() {
        assert_eq!(AppError::LoginRequired.alert_message(), LOGIN_ALERT);
        assert_eq!(
            AppError::Validation("Enter the question first.".into()).alert_message(),
            "Enter the question first."
        );
        assert_eq!(AppError::Browser("quota".into()).alert_message(), GENERIC_ALERT);
        assert_eq!(AppError::File("unreadable".into()).alert_message(), GENERIC_ALERT);
    }

    #[test]
    fn test_stage_busy() {
        assert!(!FlowStage::Idle.is_busy());
        assert!(FlowStage::Encoding.is_busy());
        assert!(FlowStage::Recognizing.is_busy());
        assert!(FlowStage::Correcting.is_busy());
        assert!(!FlowStage::Done.is_busy());
        assert!(!FlowStage::Failed.is_busy());
    }
}
