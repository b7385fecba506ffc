//! Backend and browser services.
//!
//! # Services
//!
//! - [`upload`] - HTTP calls to the recognition, correction and evaluation endpoints
//! - [`document`] - base64 payload encoding and OCR block joining
//! - [`browser`] - session storage, navigation, alerts and file reading
//! - [`flow`] - the upload flow tying the above together
//! - [`feedback`] - answer feedback requested from the results page

pub mod upload;
pub mod document;
pub mod browser;
pub mod flow;
pub mod feedback;

pub use upload::*;
pub use document::*;
pub use browser::*;
pub use flow::*;
pub use feedback::*;
