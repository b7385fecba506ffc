//! HTTP client for the recognition, correction and evaluation endpoints.
//!
//! Every endpoint sits behind the backend's login. Requests carry the
//! session cookie (`credentials: include`); a request without a session is
//! redirected to the login page, which is reported as
//! [`AppError::LoginRequired`] rather than as a broken body.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config::FlowConfig;
use crate::types::{
    AppError, AppResult, CorrectionRequest, CorrectionResponse, EvaluationRequest,
    EvaluationResponse, RecognitionRequest, RecognitionResponse,
};

/// The backend calls this app makes.
///
/// Implemented over HTTP by [`HttpDocumentApi`]; tests substitute an
/// in-memory fake.
#[allow(async_fn_in_trait)]
pub trait DocumentApi {
    /// Submit a document for text recognition.
    async fn recognize(&self, request: &RecognitionRequest) -> AppResult<RecognitionResponse>;

    /// Submit extracted text for correction.
    async fn correct(&self, request: &CorrectionRequest) -> AppResult<CorrectionResponse>;

    /// Ask for feedback on corrected text as an answer to a question.
    async fn evaluate(&self, request: &EvaluationRequest) -> AppResult<EvaluationResponse>;
}

/// [`DocumentApi`] backed by `fetch`.
#[derive(Clone, Debug)]
pub struct HttpDocumentApi {
    process_document_url: String,
    correct_text_url: String,
    evaluate_text_url: String,
    login_path: String,
}

impl HttpDocumentApi {
    pub fn from_config(config: &FlowConfig) -> Self {
        Self {
            process_document_url: config.process_document_url.clone(),
            correct_text_url: config.correct_text_url.clone(),
            evaluate_text_url: config.evaluate_text_url.clone(),
            login_path: config.login_path.clone(),
        }
    }

    /// POST a JSON body and decode the JSON answer.
    ///
    /// The status code is not checked: the backend reports failures as JSON
    /// bodies on 4xx/5xx responses, and callers inspect those bodies.
    async fn post_json<B, R>(&self, url: &str, body: &B) -> AppResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = Request::post(url)
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if status == 401 || is_login_redirect(response.redirected(), &response.url(), &self.login_path) {
            log::warn!("POST {} needs a login session", url);
            return Err(AppError::LoginRequired);
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

        log::debug!("POST {} -> {} ({} bytes)", url, status, text.len());

        decode_body(status, &text)
    }
}

impl DocumentApi for HttpDocumentApi {
    async fn recognize(&self, request: &RecognitionRequest) -> AppResult<RecognitionResponse> {
        self.post_json(&self.process_document_url, request).await
    }

    async fn correct(&self, request: &CorrectionRequest) -> AppResult<CorrectionResponse> {
        self.post_json(&self.correct_text_url, request).await
    }

    async fn evaluate(&self, request: &EvaluationRequest) -> AppResult<EvaluationResponse> {
        self.post_json(&self.evaluate_text_url, request).await
    }
}

/// Whether `fetch` followed a redirect that ended on the login page.
fn is_login_redirect(redirected: bool, final_url: &str, login_path: &str) -> bool {
    if !redirected {
        return false;
    }
    let without_origin = match final_url.find("://") {
        Some(scheme_end) => {
            let rest = &final_url[scheme_end + 3..];
            rest.find('/').map(|i| &rest[i..]).unwrap_or("/")
        }
        None => final_url,
    };
    let path = without_origin
        .split(&['?', '#'][..])
        .next()
        .unwrap_or("");

    path.trim_end_matches('/') == login_path.trim_end_matches('/')
}

fn decode_body<R: DeserializeOwned>(status: u16, text: &str) -> AppResult<R> {
    serde_json::from_str(text).map_err(|e| {
        AppError::Network(format!("Failed to parse response (status {}): {}", status, e))
    })
}
