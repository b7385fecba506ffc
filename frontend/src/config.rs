//! Application configuration.
//!
//! Centralized configuration for the Scribe frontend. Endpoint paths are
//! relative to the page origin; in development `Trunk.toml` proxies them
//! to the document backend.

/// Recognition endpoint (OCR block extraction).
pub const PROCESS_DOCUMENT_PATH: &str = "/process-document";

/// Correction endpoint (spelling fixes, HTML formatting).
pub const CORRECT_TEXT_PATH: &str = "/correct-text";

/// Answer feedback endpoint, used from the results page.
pub const EVALUATE_TEXT_PATH: &str = "/evaluate-text";

/// Host-served account pages. The endpoints above need a logged-in
/// session cookie; these pages are rendered by the backend, not this app.
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const LOGOUT_PATH: &str = "/logout";

/// Session storage key holding the corrected text between pages.
pub const CORRECTED_TEXT_KEY: &str = "correctedText";

/// Results page the flow navigates to.
pub const RESULTS_PATH: &str = "/process";

/// Id of the hidden file input.
pub const FILE_INPUT_ID: &str = "fileInput";

/// Id of the visible trigger button.
pub const UPLOAD_BUTTON_ID: &str = "upload-button";

/// Maximum status entries kept in the status panel, across runs.
pub const MAX_STATUS_ENTRIES: usize = 50;

/// Everything the upload flow needs to know about its surroundings.
///
/// Passed into [`crate::services::UploadFlow`] instead of being read from
/// globals, so a flow can be pointed at other endpoints or storage keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowConfig {
    pub file_input_id: String,
    pub upload_button_id: String,
    pub process_document_url: String,
    pub correct_text_url: String,
    pub evaluate_text_url: String,
    /// Where to send the user when the backend wants a login
    pub login_path: String,
    pub storage_key: String,
    pub results_path: String,
}

impl FlowConfig {
    /// Prefix the endpoint paths with a backend origin.
    ///
    /// An empty base keeps the paths relative to the page.
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.process_document_url = format!("{}{}", base, PROCESS_DOCUMENT_PATH);
        self.correct_text_url = format!("{}{}", base, CORRECT_TEXT_PATH);
        self.evaluate_text_url = format!("{}{}", base, EVALUATE_TEXT_PATH);
        self
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            file_input_id: FILE_INPUT_ID.to_string(),
            upload_button_id: UPLOAD_BUTTON_ID.to_string(),
            process_document_url: PROCESS_DOCUMENT_PATH.to_string(),
            correct_text_url: CORRECT_TEXT_PATH.to_string(),
            evaluate_text_url: EVALUATE_TEXT_PATH.to_string(),
            login_path: LOGIN_PATH.to_string(),
            storage_key: CORRECTED_TEXT_KEY.to_string(),
            results_path: RESULTS_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_backend_routes() {
        let config = FlowConfig::default();
        assert_eq!(config.process_document_url, "/process-document");
        assert_eq!(config.correct_text_url, "/correct-text");
        assert_eq!(config.evaluate_text_url, "/evaluate-text");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.storage_key, "correctedText");
        assert_eq!(config.results_path, "/process");
        assert_eq!(config.file_input_id, "fileInput");
        assert_eq!(config.upload_button_id, "upload-button");
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let config = FlowConfig::default().with_api_base("http://localhost:5000/");
        assert_eq!(config.process_document_url, "http://localhost:5000/process-document");
        assert_eq!(config.correct_text_url, "http://localhost:5000/correct-text");
        assert_eq!(config.evaluate_text_url, "http://localhost:5000/evaluate-text");
        // unchanged
        assert_eq!(config.results_path, "/process");
    }
}
