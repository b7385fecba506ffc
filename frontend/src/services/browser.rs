//! Browser side effects: session storage, navigation, alerts, file reading.
//!
//! Each effect sits behind a small trait so the upload flow can be
//! exercised outside a browser.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement, Storage};

use crate::types::{AppError, AppResult, SelectedFile};

/// Page-scoped key/value storage.
pub trait SessionStore {
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
}

/// Moves the browser to another page.
pub trait Navigator {
    fn navigate(&self, path: &str) -> AppResult<()>;
}

/// Shows a blocking message to the user.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage(&self) -> AppResult<Storage> {
        gloo_utils::window()
            .session_storage()
            .map_err(|e| AppError::Browser(format!("sessionStorage unavailable: {:?}", e)))?
            .ok_or_else(|| AppError::Browser("sessionStorage unavailable".into()))
    }
}

impl SessionStore for BrowserSessionStore {
    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Browser(format!("Failed to store '{}': {:?}", key, e)))
    }

    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| AppError::Browser(format!("Failed to read '{}': {:?}", key, e)))
    }
}

/// Full page navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) -> AppResult<()> {
        gloo_utils::window()
            .location()
            .set_href(path)
            .map_err(|e| AppError::Browser(format!("Failed to navigate to {}: {:?}", path, e)))
    }
}

/// `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}

/// Something a flow can read a document from.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn read(&self) -> AppResult<SelectedFile>;
}

/// A picked browser file, read completely into memory.
impl DocumentSource for File {
    async fn read(&self) -> AppResult<SelectedFile> {
        let buffer = JsFuture::from(self.array_buffer())
            .await
            .map_err(|e| AppError::File(format!("Failed to read {}: {:?}", self.name(), e)))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

        Ok(SelectedFile::new(self.name(), bytes))
    }
}

/// Already in memory.
impl DocumentSource for SelectedFile {
    async fn read(&self) -> AppResult<SelectedFile> {
        Ok(self.clone())
    }
}

/// Open the file picker behind the input with the given id.
pub fn open_file_picker(input_id: &str) -> AppResult<()> {
    let input = gloo_utils::document()
        .get_element_by_id(input_id)
        .ok_or_else(|| AppError::Browser(format!("No element with id '{}'", input_id)))?;
    let input = input
        .dyn_ref::<HtmlInputElement>()
        .ok_or_else(|| AppError::Browser(format!("Element '{}' is not an input", input_id)))?;

    input.click();
    Ok(())
}
