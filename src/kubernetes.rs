use anyhow::Context;
use k8s_openapi::api::networking::v1::Ingress;
use kube::config::{self, KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, api::ListParams};
use std::path::Path;
use tracing::info;

/// Build a client from an explicit kubeconfig file, a named context, or the
/// inferred default ($KUBECONFIG, ~/.kube/config, then in-cluster).
pub async fn connect(kubeconfig: Option<&Path>, context: Option<&str>) -> anyhow::Result<Client> {
    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    let config = match (kubeconfig, context) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("Failed to read kubeconfig {}", path.display()))?;
            let context_name = context
                .map(str::to_string)
                .or_else(|| kubeconfig.current_context.clone())
                .unwrap_or_else(|| "default".to_string());
            let config = config::Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(|e| {
                    anyhow::anyhow!(
                        "Context '{}' not usable in {}: {}",
                        context_name,
                        path.display(),
                        e
                    )
                })?;
            info!("Using context: {} ({})", context_name, path.display());
            config
        }
        (None, Some(ctx)) => {
            let config = config::Config::from_kubeconfig(&options)
                .await
                .map_err(|e| anyhow::anyhow!("Context '{}' not found in kubeconfig: {}", ctx, e))?;
            info!("Using context: {}", ctx);
            config
        }
        (None, None) => {
            let current_context_name = Kubeconfig::read()
                .ok()
                .and_then(|kc| kc.current_context)
                .unwrap_or_else(|| "in-cluster".to_string());
            let config = config::Config::infer()
                .await
                .context("Failed to load cluster configuration")?;
            info!("Using current context: {}", current_context_name);
            config
        }
    };

    Ok(Client::try_from(config)?)
}

/// Snapshot of every ingress, cluster-wide unless a namespace is given.
pub async fn list_ingresses(
    client: &Client,
    namespace: Option<&str>,
) -> anyhow::Result<Vec<Ingress>> {
    let api: Api<Ingress> = match namespace {
        Some(ns) => Api::namespaced(client.clone(), ns),
        None => Api::all(client.clone()),
    };

    let list = api
        .list(&ListParams::default())
        .await
        .context("Failed to list ingresses")?;

    info!(
        "Found {} ingresses in {}",
        list.items.len(),
        namespace.map_or_else(|| "all namespaces".to_string(), |ns| format!("namespace {}", ns))
    );

    Ok(list.items)
}
