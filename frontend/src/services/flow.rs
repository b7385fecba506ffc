//! The upload flow: read, recognize, correct, store, navigate.
//!
//! ```text
//! Idle ─► Encoding ─► Recognizing ─► Correcting ─► Done
//!             │            │              │
//!             └────────────┴──────────────┴──► Failed (alert)
//! ```
//!
//! Every failure ends the run with a single alert. Nothing is retried and
//! nothing written before the failure is rolled back. A missing login
//! session additionally sends the browser to the login page.

use std::rc::Rc;

use crate::config::FlowConfig;
use crate::services::browser::{
    BrowserNavigator, BrowserNotifier, BrowserSessionStore, DocumentSource, Navigator, Notifier,
    SessionStore,
};
use crate::services::document::{correction_request, recognition_request};
use crate::services::upload::{DocumentApi, HttpDocumentApi};
use crate::types::{AppError, AppResult, FlowStage};

/// How a run ended.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowOutcome {
    /// Nothing was picked; no request was made.
    NoFile,
    /// Corrected text was stored and the browser sent to the results page.
    Completed(String),
    /// The run aborted and the user was alerted.
    Failed(AppError),
}

/// One upload-and-correct pipeline bound to its collaborators.
pub struct UploadFlow<A, S, N, T> {
    config: FlowConfig,
    api: A,
    store: S,
    navigator: N,
    notifier: T,
    on_stage: Option<Rc<dyn Fn(FlowStage)>>,
}

/// Flow wired to `fetch`, `sessionStorage`, `location` and `alert`.
pub type BrowserUploadFlow =
    UploadFlow<HttpDocumentApi, BrowserSessionStore, BrowserNavigator, BrowserNotifier>;

impl BrowserUploadFlow {
    pub fn browser(config: FlowConfig) -> Self {
        let api = HttpDocumentApi::from_config(&config);
        UploadFlow::new(config, api, BrowserSessionStore, BrowserNavigator, BrowserNotifier)
    }
}

impl<A, S, N, T> UploadFlow<A, S, N, T>
where
    A: DocumentApi,
    S: SessionStore,
    N: Navigator,
    T: Notifier,
{
    pub fn new(config: FlowConfig, api: A, store: S, navigator: N, notifier: T) -> Self {
        Self {
            config,
            api,
            store,
            navigator,
            notifier,
            on_stage: None,
        }
    }

    /// Register a callback invoked on every stage change.
    pub fn on_stage(mut self, listener: impl Fn(FlowStage) + 'static) -> Self {
        self.on_stage = Some(Rc::new(listener));
        self
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Run the flow for an optional picked document.
    pub async fn run<D: DocumentSource>(&self, source: Option<&D>) -> FlowOutcome {
        let Some(source) = source else {
            log::info!("No file selected");
            return FlowOutcome::NoFile;
        };

        match self.process(source).await {
            Ok(corrected) => {
                self.report(FlowStage::Done);
                FlowOutcome::Completed(corrected)
            }
            Err(e) => {
                log::error!("Upload flow failed: {}", e);
                self.report(FlowStage::Failed);
                self.notifier.alert(&e.alert_message());
                if e == AppError::LoginRequired {
                    if let Err(nav) = self.navigator.navigate(&self.config.login_path) {
                        log::error!("Could not open login page: {}", nav);
                    }
                }
                FlowOutcome::Failed(e)
            }
        }
    }

    async fn process<D: DocumentSource>(&self, source: &D) -> AppResult<String> {
        self.report(FlowStage::Encoding);
        let file = source.read().await?;
        log::info!("File selected: {} ({} bytes)", file.name, file.bytes.len());
        let request = recognition_request(&file);

        self.report(FlowStage::Recognizing);
        let blocks = self.api.recognize(&request).await?.into_blocks()?;
        log::info!("Recognized {} blocks", blocks.len());

        self.report(FlowStage::Correcting);
        let corrected = self
            .api
            .correct(&correction_request(&blocks))
            .await?
            .into_text()?;

        self.store.set_item(&self.config.storage_key, &corrected)?;
        self.navigator.navigate(&self.config.results_path)?;
        log::info!("Corrected text stored, navigating to {}", self.config.results_path);

        Ok(corrected)
    }

    fn report(&self, stage: FlowStage) {
        log::debug!("Upload flow stage: {:?}", stage);
        if let Some(listener) = &self.on_stage {
            listener(stage);
        }
    }
}
