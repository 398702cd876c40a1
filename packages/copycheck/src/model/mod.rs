//! Generative model implementations.

mod gemini;

pub use gemini::GeminiModel;
