use crate::types::CheckResult;
use crossterm::style::Stylize;
use futures::stream::{Stream, StreamExt};
use std::io::{self, Write};
use std::time::Duration;
use tracing::info;

/// Print a block for every unreachable result, pausing `delay` after each one.
/// Reachable results produce no output.
pub async fn report_results<W: Write>(
    results: impl Stream<Item = CheckResult>,
    out: &mut W,
    color: bool,
    delay: Duration,
) -> io::Result<Summary> {
    let mut results = std::pin::pin!(results);
    let mut summary = Summary::default();

    while let Some(result) = results.next().await {
        summary.record(&result);
        if result.is_reachable() {
            continue;
        }

        write_failure(out, &result, color)?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    Ok(summary)
}

/// Write the block printed for a redirect whose target did not resolve.
pub fn write_failure<W: Write>(out: &mut W, result: &CheckResult, color: bool) -> io::Result<()> {
    let source = format!("🔴 Source: {}", result.source_url);
    let target = format!("😔 Target: {}", result.target_url);
    if color {
        writeln!(out, "{}", source.red())?;
        writeln!(out, "{}", target.yellow())?;
    } else {
        writeln!(out, "{}", source)?;
        writeln!(out, "{}", target)?;
    }

    let rule = &result.rule;
    writeln!(out, "Ingress: {}/{}", rule.namespace, rule.ingress)?;
    writeln!(out, "Service: {}", rule.service.as_deref().unwrap_or("-"))?;
    writeln!(out, "Reason: {}", result.outcome)?;
    writeln!(out)?;
    out.flush()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub ingresses: usize,
    pub redirects: usize,
    pub failures: usize,
}

impl Summary {
    pub fn record(&mut self, result: &CheckResult) {
        self.redirects += 1;
        if !result.is_reachable() {
            self.failures += 1;
        }
    }

    pub fn log(&self) {
        info!(
            "Checked {} redirects from {} ingresses: {} unreachable",
            self.redirects, self.ingresses, self.failures
        );
    }
}
