//! Scribe - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a scanned document for text
//! recognition, sends the recognized text for correction, and shows the
//! corrected result.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Router                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /          UploadPage                                       │
//! │             ├── Hero                                         │
//! │             ├── UploadSection ──► UploadFlow                 │
//! │             │     POST /process-document, POST /correct-text │
//! │             │     sessionStorage["correctedText"]            │
//! │             └── StatusPanel                                  │
//! │  /process   ResultsPage                                      │
//! │             └── ResultsSection (reads sessionStorage)        │
//! │                   └── FeedbackPanel ──► POST /evaluate-text  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint paths, element ids, [`FlowConfig`]
//! - [`types`] - Wire types, flow stages, errors
//! - [`components`] - UI components
//! - [`services`] - HTTP client, browser effects, the upload flow

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    SelectedFile,
    // API
    RecognitionRequest, RecognitionResponse, OcrBlock,
    CorrectionRequest, CorrectionResponse,
    EvaluationRequest, EvaluationResponse,
    // Flow
    FlowStage, StatusEntry,
    // Errors
    AppError, AppResult, GENERIC_ALERT, LOGIN_ALERT,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

/// Root component, mounted by the `scribe-frontend` binary.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(FlowConfig::default());

    view! {
        <Title text="Scribe"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                    <Route path="/process" view=ResultsPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    let config = use_context::<FlowConfig>().unwrap_or_default();
    let (status, set_status) = create_signal(Vec::<StatusEntry>::new());

    log::debug!("Upload page ready");

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <UploadSection config=config set_status=set_status/>

            // Status panel appears once a run has started
            <Show
                when=move || !status.get().is_empty()
                fallback=|| view! { }
            >
                <StatusPanel entries=status/>
            </Show>
        </div>

        <Footer/>
    }
}

#[component]
fn ResultsPage() -> impl IntoView {
    view! {
        <Title text="Scribe - Results"/>
        <Header/>

        <div class="container">
            <ResultsSection/>
        </div>

        <Footer/>
    }
}
