use crate::types::RedirectRule;
use k8s_openapi::api::networking::v1::{Ingress, IngressRule};
use kube::ResourceExt;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::warn;

pub const SNIPPET_ANNOTATION: &str = "nginx.ingress.kubernetes.io/configuration-snippet";

static REWRITE_REDIRECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\brewrite \^(.*?)\s+redirect;").expect("rewrite pattern is valid")
});

/// Find every `rewrite ^<source> ... <target> redirect;` in a snippet.
///
/// The captured text is split on spaces: the first piece is the source, the
/// last one the target.
pub fn parse_redirects(snippet: &str) -> Vec<(&str, &str)> {
    REWRITE_REDIRECT
        .captures_iter(snippet)
        .filter_map(|caps| caps.get(1))
        .map(|m| {
            let mut parts = m.as_str().split(' ');
            let source = parts.next().unwrap_or_default();
            let target = parts.last().unwrap_or(source);
            (source, target)
        })
        .collect()
}

/// Backend service of a rule's first HTTP path.
fn rule_service(rule: &IngressRule) -> Option<String> {
    rule.http
        .as_ref()
        .and_then(|http| http.paths.first())
        .and_then(|path| path.backend.service.as_ref())
        .map(|svc| svc.name.clone())
}

/// Extract redirect rules from a set of ingresses.
///
/// Each host rule of an ingress gets its own copy of the ingress's redirects,
/// attributed to that rule's host and backend service. A (host, source, target)
/// triple is only kept the first time it is seen.
pub fn extract_redirects(ingresses: &[Ingress]) -> Vec<RedirectRule> {
    let mut rules = Vec::new();
    let mut seen = HashSet::new();

    for ingress in ingresses {
        let Some(snippet) = ingress.annotations().get(SNIPPET_ANNOTATION) else {
            continue;
        };

        let redirects = parse_redirects(snippet);
        if redirects.is_empty() {
            continue;
        }

        let name = ingress.name_any();
        let namespace = ingress.namespace().unwrap_or_default();
        let ingress_rules = ingress
            .spec
            .as_ref()
            .and_then(|spec| spec.rules.as_deref())
            .unwrap_or_default();

        for rule in ingress_rules {
            let Some(host) = rule.host.as_deref().filter(|h| !h.is_empty()) else {
                warn!(
                    "Skipping host-less rule in ingress {}/{}: {} redirects not checked",
                    namespace,
                    name,
                    redirects.len()
                );
                continue;
            };
            let service = rule_service(rule);

            for (source, target) in &redirects {
                if !seen.insert((host.to_string(), source.to_string(), target.to_string())) {
                    continue;
                }
                rules.push(RedirectRule {
                    source: source.to_string(),
                    target: target.to_string(),
                    host: host.to_string(),
                    service: service.clone(),
                    ingress: name.clone(),
                    namespace: namespace.clone(),
                });
            }
        }
    }

    rules
}

/// `http://<host><source>` without the trailing `$` anchor.
pub fn source_url(host: &str, source: &str) -> String {
    let url = format!("http://{}{}", host, source);
    match url.strip_suffix('$') {
        Some(stripped) => stripped.to_string(),
        None => url,
    }
}

/// Absolute targets are kept as-is, anything else is resolved against the host.
pub fn target_url(host: &str, target: &str) -> String {
    if target.starts_with("http") || target.starts_with("www") {
        target.to_string()
    } else {
        let path = target.strip_prefix('/').unwrap_or(target);
        format!("http://{}/{}", host, path)
    }
}
