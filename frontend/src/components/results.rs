//! Results page content: the corrected text left in session storage by
//! the upload flow, and feedback on it as an answer to a question.

use leptos::*;
use crate::FlowConfig;
use crate::services::{request_feedback, BrowserSessionStore, HttpDocumentApi, SessionStore};

/// Read the corrected text, treating a missing or blank value as absent.
pub fn load_corrected_text(store: &impl SessionStore, key: &str) -> Option<String> {
    match store.get_item(key) {
        Ok(Some(text)) if !text.trim().is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            log::error!("Could not read corrected text: {}", e);
            None
        }
    }
}

/// Corrected text and the answer feedback form.
///
/// Both the corrected text and the feedback are HTML written by the
/// backend and injected with `inner_html` unsanitised, so the correction
/// and evaluation endpoints must be trusted.
#[component]
pub fn ResultsSection() -> impl IntoView {
    let config = use_context::<FlowConfig>().unwrap_or_default();
    let corrected = load_corrected_text(&BrowserSessionStore, &config.storage_key);

    if corrected.is_none() {
        log::warn!("No corrected text found under '{}'", config.storage_key);
    }

    view! {
        <div class="results-section">
            <div class="results-header">
                <div class="results-title">"📝 Corrected text"</div>
                <a href="/" class="btn btn-secondary">"Process another document"</a>
            </div>
            {match corrected {
                // The correction service answers with HTML markup
                Some(html) => {
                    let shown = html.clone();
                    view! {
                        <div class="results-content" inner_html=shown></div>
                        <FeedbackPanel text=html config=config/>
                    }.into_view()
                }
                None => view! {
                    <div class="results-empty">
                        "No corrected text yet. "
                        <a href="/">"Upload a document"</a>
                        " to get started."
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// Question input and the evaluation result for the corrected text.
#[component]
fn FeedbackPanel(text: String, config: FlowConfig) -> impl IntoView {
    let (question, set_question) = create_signal(String::new());
    let (is_evaluating, set_is_evaluating) = create_signal(false);
    let (feedback, set_feedback) = create_signal(None::<Result<String, String>>);
    let text = store_value(text);
    let api = store_value(HttpDocumentApi::from_config(&config));

    let on_evaluate = move |_| {
        if is_evaluating.get_untracked() {
            return;
        }
        set_is_evaluating.set(true);
        set_feedback.set(None);

        spawn_local(async move {
            let api = api.get_value();
            let text = text.get_value();
            let result = request_feedback(&api, &text, &question.get_untracked()).await;
            if let Err(e) = &result {
                log::error!("Feedback failed: {}", e);
            }
            set_feedback.set(Some(result.map_err(|e| e.alert_message())));
            set_is_evaluating.set(false);
        });
    };

    view! {
        <div class="feedback-section">
            <div class="feedback-title">"🎓 Answer feedback"</div>
            <textarea
                class="feedback-question"
                placeholder="Paste the question this answer responds to"
                prop:value=move || question.get()
                on:input=move |ev| set_question.set(event_target_value(&ev))
            ></textarea>
            <button
                type="button"
                class="btn btn-primary"
                on:click=on_evaluate
                disabled=move || is_evaluating.get()
            >
                {move || if is_evaluating.get() { "⏳ Evaluating..." } else { "Get feedback" }}
            </button>
            {move || match feedback.get() {
                Some(Ok(html)) => view! {
                    <div class="feedback-content" inner_html=html></div>
                }.into_view(),
                Some(Err(message)) => view! {
                    <div class="error-message">{message}</div>
                }.into_view(),
                None => view! { }.into_view(),
            }}
        </div>
    }
}
