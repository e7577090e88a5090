//! Check runner: drives replies through envelope and payload validation
//!
//! The runner walks each endpoint's path variants strictly in sequence:
//! fetch one reply, consume it fully (envelope then payload validation),
//! report it, then move on. The first failure of any kind propagates
//! immediately; later variants and endpoints are not attempted.

use crate::error::Result;
use kinocheck_schemas::{validate_envelope, Endpoint};
use serde_json::{Map, Value};
use std::future::Future;
use tracing::{debug, info};

/// Source of decoded API replies, keyed by request path.
///
/// [`crate::ApiClient`] is the production implementation; tests substitute
/// canned replies.
pub trait ReplySource {
    fn fetch_reply(&self, path: &str) -> impl Future<Output = Result<Value>> + Send;
}

/// Where validated payloads go for presentation.
///
/// The runner only calls this for payloads that passed validation, so
/// implementations may treat every handed-in payload as schema-conformant.
pub trait ReportSink {
    fn report(&mut self, endpoint: Endpoint, path: &str, payload: &Map<String, Value>);
}

/// Drives conformance checks against one reply source.
pub struct CheckRunner<S> {
    source: S,
}

impl<S: ReplySource> CheckRunner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Check every path variant of one endpoint, reporting each
    /// conforming payload to the sink. Fails fast on the first
    /// transport, decode, or conformance error.
    pub async fn check_endpoint<R: ReportSink>(
        &self,
        endpoint: Endpoint,
        sink: &mut R,
    ) -> Result<()> {
        for &path in endpoint.path_variants() {
            info!(endpoint = endpoint.name(), path, "checking reply conformance");
            let reply = self.source.fetch_reply(path).await?;
            let payload = validate_envelope(&reply, path)?;
            endpoint.validate_payload(payload)?;
            debug!(endpoint = endpoint.name(), path, "reply conforms");
            sink.report(endpoint, path, payload);
        }
        Ok(())
    }

    /// Check every endpoint in declaration order, aborting on the first
    /// failure.
    pub async fn check_all<R: ReportSink>(&self, sink: &mut R) -> Result<()> {
        for endpoint in Endpoint::ALL {
            self.check_endpoint(endpoint, sink).await?;
        }
        Ok(())
    }
}
