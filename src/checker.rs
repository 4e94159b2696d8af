use crate::types::{CheckOutcome, CheckResult, RedirectRule};
use crate::utils::{source_url, target_url};
use anyhow::Context;
use futures::stream::{self, Stream, StreamExt};
use reqwest::StatusCode;
use std::error::Error as _;
use std::time::Duration;
use tracing::debug;

/// Probes redirect targets over a dedicated client that skips certificate
/// verification. Cluster-internal endpoints are often self-signed.
pub struct Checker {
    client: reqwest::Client,
}

impl Checker {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().danger_accept_invalid_certs(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// A target is reachable only if the GET succeeds with a 200.
    pub async fn probe(&self, url: &str) -> CheckOutcome {
        match self.client.get(url).send().await {
            Ok(resp) if resp.status() == StatusCode::OK => CheckOutcome::Reachable,
            Ok(resp) => CheckOutcome::Status(resp.status().as_u16()),
            Err(e) => CheckOutcome::Transport(error_chain(&e)),
        }
    }

    pub async fn check(&self, rule: RedirectRule) -> CheckResult {
        let source_url = source_url(&rule.host, &rule.source);
        let target_url = target_url(&rule.host, &rule.target);
        let outcome = self.probe(&target_url).await;

        debug!(
            "[{}/{}] {} -> {}: {}",
            rule.namespace, rule.ingress, source_url, target_url, outcome
        );

        CheckResult {
            rule,
            source_url,
            target_url,
            outcome,
        }
    }

    /// Check rules with up to `concurrency` requests in flight. Results come
    /// back in the same order as `rules`.
    pub fn check_all(
        &self,
        rules: Vec<RedirectRule>,
        concurrency: usize,
    ) -> impl Stream<Item = CheckResult> + '_ {
        stream::iter(rules)
            .map(move |rule| self.check(rule))
            .buffered(concurrency.max(1))
    }
}

fn error_chain(err: &reqwest::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
