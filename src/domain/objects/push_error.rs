use regex::RegexSet;
use std::sync::LazyLock;

/// Why a `git push` failed, recovered from the subprocess stderr.
///
/// git reports transport problems as free text, so classification matches
/// known message fragments. The tables are locale-sensitive by nature (git
/// localizes some of these messages); anything unrecognized passes through
/// verbatim as `Other` rather than being mislabeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushFailure {
    NetworkUnreachable,
    AuthenticationFailed,
    TimedOut,
    Other,
}

const AUTH_PATTERNS: [&str; 4] = [
    r"(?i)authentication failed",
    r"(?i)permission denied",
    r"(?i)could not read (username|password)",
    r"(?i)\b403\b",
];

const NETWORK_PATTERNS: [&str; 5] = [
    r"(?i)couldn'?t connect to server",
    r"(?i)could not resolve host",
    r"(?i)failed to connect",
    r"(?i)connection (timed out|refused|reset)",
    r"(?i)network is unreachable",
];

static AUTH_MATCHERS: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(AUTH_PATTERNS).expect("auth patterns are valid regexes"));
static NETWORK_MATCHERS: LazyLock<RegexSet> =
    LazyLock::new(|| RegexSet::new(NETWORK_PATTERNS).expect("network patterns are valid regexes"));

impl PushFailure {
    /// Classify a failed push from its stderr. Authentication wins over
    /// network because git wraps both in the same `unable to access`
    /// preamble.
    pub fn classify(stderr: &str) -> Self {
        if AUTH_MATCHERS.is_match(stderr) {
            PushFailure::AuthenticationFailed
        } else if NETWORK_MATCHERS.is_match(stderr) {
            PushFailure::NetworkUnreachable
        } else {
            PushFailure::Other
        }
    }

    fn headline(&self) -> &'static str {
        match self {
            PushFailure::NetworkUnreachable => "network unreachable",
            PushFailure::AuthenticationFailed => "authentication failed",
            PushFailure::TimedOut => "timed out",
            PushFailure::Other => "push failed",
        }
    }

    fn guidance(&self) -> Option<&'static str> {
        match self {
            PushFailure::NetworkUnreachable | PushFailure::TimedOut => {
                Some("check your network connection and proxy settings (`grit config proxy`)")
            }
            PushFailure::AuthenticationFailed => {
                Some("check your credentials and your access rights to the remote repository")
            }
            PushFailure::Other => None,
        }
    }

    /// Turn the classification into the error shown to the user, keeping
    /// git's own text and appending actionable guidance.
    pub fn into_error(self, detail: &str) -> anyhow::Error {
        let detail = detail.trim();

        let mut message = match self {
            PushFailure::Other if !detail.is_empty() => format!("git push failed: {detail}"),
            PushFailure::Other => "git push failed".to_string(),
            _ => {
                let mut message = format!("git push failed: {}", self.headline());
                if !detail.is_empty() {
                    message.push('\n');
                    message.push_str(detail);
                }
                message
            }
        };

        if let Some(guidance) = self.guidance() {
            message.push_str("\nhint: ");
            message.push_str(guidance);
        }

        anyhow::anyhow!(message)
    }
}
