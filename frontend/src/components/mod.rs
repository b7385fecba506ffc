//! UI Components for the Scribe application.
//!
//! # Layout Components
//! - [`Header`] - Links to the backend's account pages
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File picker and upload flow trigger
//! - [`StatusPanel`] - Timestamped flow stages
//! - [`ResultsSection`] - Corrected text and answer feedback on the results page

mod header;
mod hero;
mod upload;
mod status;
mod results;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use status::*;
pub use results::*;
pub use footer::*;
