//! Core trait abstractions.
//!
//! The two external collaborators — the document store and the
//! generative-text service — sit behind narrow traits so the pipeline can
//! be tested with in-memory fakes instead of real cloud clients.

pub mod model;
pub mod store;

pub use model::GenerativeModel;
pub use store::DocumentStore;
