//! Session - main entry point wiring resolver and analyzer together.

use crate::error::Result;
use crate::pipeline::{analyzer::ComplianceAnalyzer, cache::ReferenceCache, resolver::FallbackResolver};
use crate::traits::{DocumentStore, GenerativeModel};
use crate::types::{CoreConfig, RawDocument};

/// One analysis session: constructor-injected store, model, and config.
///
/// The session owns its cache, so there is no ambient global state and
/// teardown is dropping the value.
///
/// # Example
///
/// ```rust,ignore
/// let config = CoreConfig::new("10rpQ...");
/// let session = Session::new(
///     DriveSource::new(CredentialBundle::from_env()?),
///     GeminiModel::from_env()?,
///     config,
/// );
///
/// let report = session.run("Miracle cure inside!", None).await?;
/// ```
pub struct Session<S: DocumentStore, M: GenerativeModel> {
    resolver: FallbackResolver<S>,
    analyzer: ComplianceAnalyzer<M>,
    config: CoreConfig,
}

impl<S: DocumentStore, M: GenerativeModel> Session<S, M> {
    /// Create a session.
    pub fn new(store: S, model: M, config: CoreConfig) -> Self {
        let cache = ReferenceCache::new(store).with_ttl(config.ttl);
        Self {
            resolver: FallbackResolver::new(cache),
            analyzer: ComplianceAnalyzer::new(model),
            config,
        }
    }

    /// Run one analysis: resolve the reference, then request the report.
    ///
    /// Analysis failures are surfaced as the report body itself rather than
    /// as an error, so `run` only fails when the reference cannot be
    /// resolved. Callers needing structured analysis errors should use
    /// [`FallbackResolver`] and [`ComplianceAnalyzer`] directly.
    pub async fn run(&self, copy: &str, manual: Option<&RawDocument>) -> Result<String> {
        let reference = self
            .resolver
            .resolve(&self.config.document_id, manual)
            .await?;

        match self.analyzer.analyze(copy, &reference).await {
            Ok(report) => Ok(report),
            Err(e) => Ok(format!("Analysis failed: {}", e)),
        }
    }

    /// The resolver (exposes the cache for invalidation).
    pub fn resolver(&self) -> &FallbackResolver<S> {
        &self.resolver
    }

    /// The session configuration.
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }
}
