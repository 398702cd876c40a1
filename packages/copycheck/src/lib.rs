//! Compliance Pre-Screening Core
//!
//! A library for checking marketing copy against a regulatory reference
//! document held in a cloud store. The core is a thin, I/O-bound pipeline:
//! download the reference, extract its text (PDF or plain text), cache it
//! under a TTL, fall back to a manual upload when the cloud path fails, and
//! send one request to a generative-text service for a markdown report.
//!
//! # Design Philosophy
//!
//! - Cloud store is authoritative; manual upload is a fallback, never a peer
//! - Typed failures everywhere - "empty but valid" is distinguishable from
//!   "failed"
//! - External SDKs behind narrow traits so the core tests with in-memory
//!   fakes
//! - Synchronous at the boundary: every operation completes (or fails)
//!   before returning; no background tasks, no retries
//!
//! # Usage
//!
//! ```rust,ignore
//! use copycheck::{
//!     CoreConfig, CredentialBundle, DriveSource, GeminiModel, Session,
//! };
//!
//! let session = Session::new(
//!     DriveSource::new(CredentialBundle::from_env()?),
//!     GeminiModel::from_env()?,
//!     CoreConfig::new("10rpQ..."),
//! );
//!
//! // Cloud reference, cached for an hour
//! let report = session.run("Miracle cure inside!", None).await?;
//!
//! // Manual fallback document, consulted only if the cloud path fails
//! let backup = RawDocument::pdf(pdf_bytes);
//! let report = session.run("Miracle cure inside!", Some(&backup)).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (DocumentStore, GenerativeModel)
//! - [`types`] - Identifiers, raw documents, configuration
//! - [`extract`] - Text extraction (PDF, plain text)
//! - [`pipeline`] - Cache, fallback resolution, analysis, session wiring
//! - [`sources`] - Document store implementations (DriveSource)
//! - [`model`] - Generative model implementations (GeminiModel)
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod security;
pub mod sources;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{
    AnalysisError, AnalysisResult, CoreError, ExtractResult, ExtractionError, FetchError,
    FetchResult, Result,
};
pub use extract::extract_text;
pub use model::GeminiModel;
pub use pipeline::{
    format_analysis_prompt, CacheEntry, ComplianceAnalyzer, FallbackResolver, ReferenceCache,
    Session,
};
pub use security::{CredentialBundle, ModelCredentials, SecretString};
pub use sources::{is_pdf, DriveSource};
pub use testing::{MockFailure, MockModel, MockStore};
pub use traits::{DocumentStore, GenerativeModel};
pub use types::{ContentKind, CoreConfig, DocumentId, RawDocument};
