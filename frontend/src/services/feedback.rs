//! Answer feedback for the corrected text shown on the results page.

use crate::services::upload::DocumentApi;
use crate::types::{AppError, AppResult, EvaluationRequest};

/// Ask the evaluation endpoint to grade `text` as an answer to `question`.
///
/// A blank question or text is rejected before any request; the backend
/// would answer 400 for either.
pub async fn request_feedback<A: DocumentApi>(
    api: &A,
    text: &str,
    question: &str,
) -> AppResult<String> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("Enter the question this answer responds to.".into()));
    }
    if text.trim().is_empty() {
        return Err(AppError::Validation("There is no corrected text to evaluate.".into()));
    }

    log::info!("Requesting feedback ({} chars of text)", text.len());
    let request = EvaluationRequest {
        text: text.to_string(),
        question: question.to_string(),
    };

    api.evaluate(&request).await?.into_feedback()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CorrectionRequest, CorrectionResponse, EvaluationResponse, RecognitionRequest,
        RecognitionResponse,
    };
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct EvaluatingApi {
        answer: AppResult<EvaluationResponse>,
        seen: RefCell<Vec<EvaluationRequest>>,
    }

    impl EvaluatingApi {
        fn answering(answer: AppResult<EvaluationResponse>) -> Self {
            Self {
                answer,
                seen: RefCell::default(),
            }
        }
    }

    impl DocumentApi for EvaluatingApi {
        async fn recognize(&self, _: &RecognitionRequest) -> AppResult<RecognitionResponse> {
            unreachable!("feedback never recognizes")
        }

        async fn correct(&self, _: &CorrectionRequest) -> AppResult<CorrectionResponse> {
            unreachable!("feedback never corrects")
        }

        async fn evaluate(&self, request: &EvaluationRequest) -> AppResult<EvaluationResponse> {
            self.seen.borrow_mut().push(request.clone());
            self.answer.clone()
        }
    }

    #[test]
    fn test_feedback_returned() {
        let api = EvaluatingApi::answering(Ok(EvaluationResponse {
            feedback: Some("<p>Strong introduction</p>".into()),
            error: None,
        }));

        let feedback = block_on(request_feedback(&api, "<p>My answer</p>", "  Discuss federalism. "));
        assert_eq!(feedback.unwrap(), "<p>Strong introduction</p>");

        let seen = api.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].question, "Discuss federalism.");
        assert_eq!(seen[0].text, "<p>My answer</p>");
    }

    #[test]
    fn test_blank_question_makes_no_request() {
        let api = EvaluatingApi::answering(Ok(EvaluationResponse::default()));

        let err = block_on(request_feedback(&api, "answer", "   ")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(api.seen.borrow().is_empty());
    }

    #[test]
    fn test_blank_text_makes_no_request() {
        let api = EvaluatingApi::answering(Ok(EvaluationResponse::default()));

        let err = block_on(request_feedback(&api, "", "Why?")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(api.seen.borrow().is_empty());
    }

    #[test]
    fn test_server_error_surfaces_message() {
        let api = EvaluatingApi::answering(Ok(EvaluationResponse {
            feedback: None,
            error: Some("model overloaded".into()),
        }));

        let err = block_on(request_feedback(&api, "answer", "Why?")).unwrap_err();
        assert_eq!(err, AppError::Server("model overloaded".into()));
        assert_eq!(
            err.alert_message(),
            "An error occurred during processing: model overloaded"
        );
    }

    #[test]
    fn test_login_required_passes_through() {
        let api = EvaluatingApi::answering(Err(AppError::LoginRequired));

        let err = block_on(request_feedback(&api, "answer", "Why?")).unwrap_err();
        assert_eq!(err, AppError::LoginRequired);
    }
}
