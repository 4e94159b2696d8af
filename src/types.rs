use std::fmt;

/// A redirect declared in an ingress configuration snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    /// Path pattern as written after `rewrite ^`, e.g. `/old$`
    pub source: String,
    pub target: String,
    pub host: String,
    /// Backend service of the declaring rule's first path, if any
    pub service: Option<String>,
    pub ingress: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Reachable,
    Status(u16),
    Transport(String),
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Reachable => write!(f, "reachable"),
            CheckOutcome::Status(code) => write!(f, "HTTP {}", code),
            CheckOutcome::Transport(err) => write!(f, "{}", err),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub rule: RedirectRule,
    pub source_url: String,
    pub target_url: String,
    pub outcome: CheckOutcome,
}

impl CheckResult {
    pub fn is_reachable(&self) -> bool {
        self.outcome == CheckOutcome::Reachable
    }
}
