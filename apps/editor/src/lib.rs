//! Resume editor core.
//!
//! `ResumeStore` owns the live resume and is the only way to change it. Edits
//! are the pure functions in [`document`]; the store adds id generation,
//! timestamping and change notification. [`api_client`] reaches the backend
//! for text enhancement and saving, and [`export`] turns a resume into a
//! downloadable JSON file.

pub mod api_client;
pub mod document;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;

pub use api_client::{ApiClient, ClientConfig, Enhancement, Enhancer, ResumeSink};
pub use errors::EditError;
pub use export::ExportArtifact;
pub use models::Resume;
pub use store::{ResumeStore, SessionStatus};
