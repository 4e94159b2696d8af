use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubectl-redirect-check")]
#[command(about = "Check that redirects declared in ingress annotations resolve")]
pub struct Cli {
    /// Path to the kubeconfig file (defaults to $KUBECONFIG, then ~/.kube/config,
    /// then in-cluster config)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Context
    #[arg(long)]
    pub context: Option<String>,

    /// Namespace (all namespaces if omitted)
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Number of redirect targets checked concurrently
    #[arg(short = 'j', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Seconds to pause after each reported failure
    #[arg(long, default_value_t = 0)]
    pub failure_delay: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
