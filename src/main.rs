mod checker;
mod cli;
mod kubernetes;
mod report;
mod types;
mod utils;

use clap::Parser;
use std::io::IsTerminal;
use std::time::Duration;
use tracing::info;

use checker::Checker;
use cli::Cli;
use utils::extract_redirects;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = kubernetes::connect(cli.kubeconfig.as_deref(), cli.context.as_deref()).await?;
    let ingresses = kubernetes::list_ingresses(&client, cli.namespace.as_deref()).await?;

    let rules = extract_redirects(&ingresses);
    info!("Extracted {} redirects", rules.len());

    let checker = Checker::new(cli.timeout.map(Duration::from_secs))?;
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let failure_delay = Duration::from_secs(cli.failure_delay);

    let results = checker.check_all(rules, usize::from(cli.concurrency));
    let mut summary =
        report::report_results(results, &mut std::io::stdout(), use_color, failure_delay).await?;
    summary.ingresses = ingresses.len();

    summary.log();
    Ok(())
}
