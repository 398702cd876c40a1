//! GenerativeModel trait for text generation.

use async_trait::async_trait;

use crate::error::AnalysisResult;

/// Generative-text service abstraction.
///
/// Implementations wrap a specific provider and send a single request
/// built from a system instruction and a prompt, returning the raw text
/// response. No function-calling, no streaming, no retries.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate a text response for the given system instruction and prompt.
    async fn generate(&self, system: &str, prompt: &str) -> AnalysisResult<String>;

    /// Get the model name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
