//! Screening pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Reference acquisition with a TTL cache (download → extract → store)
//! - Two-tier fallback (cloud path first, manual upload second)
//! - Prompt formatting and the single analysis request

pub mod analyzer;
pub mod cache;
pub mod prompts;
pub mod resolver;
pub mod session;

pub use analyzer::ComplianceAnalyzer;
pub use cache::{CacheEntry, ReferenceCache};
pub use prompts::{format_analysis_prompt, ANALYSIS_PROMPT, SYSTEM_INSTRUCTION};
pub use resolver::FallbackResolver;
pub use session::Session;
