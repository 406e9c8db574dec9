use chrono::{DateTime, Utc};
use kube::api::LogParams;
use tracing::warn;

/// Lines returned when the caller gives no time boundary.
pub const DEFAULT_TAIL_LINES: i64 = 50;

/// How much history a log request asks for. Exactly one mode per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalPolicy {
    /// Everything logged since the given instant.
    SinceTimestamp(DateTime<Utc>),
    /// Only the most recent N lines.
    TailLines(i64),
}

impl RetrievalPolicy {
    /// Builds the policy from the raw `sinceTime` query value.
    ///
    /// A parseable RFC 3339 value selects since-timestamp mode; anything else
    /// (absent, empty, or unparseable) selects the default tail. An
    /// unparseable value is logged rather than rejected.
    pub fn from_since_time(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if !s.is_empty() => match DateTime::parse_from_rfc3339(s) {
                Ok(t) => RetrievalPolicy::SinceTimestamp(t.with_timezone(&Utc)),
                Err(e) => {
                    warn!("Unparseable sinceTime {:?} ({}), using tail mode", s, e);
                    RetrievalPolicy::TailLines(DEFAULT_TAIL_LINES)
                }
            },
            _ => RetrievalPolicy::TailLines(DEFAULT_TAIL_LINES),
        }
    }

    /// Converts the policy into log parameters scoped to one container.
    pub fn into_log_params(self, container: &str) -> LogParams {
        let mut lp = LogParams {
            container: Some(container.to_string()),
            ..Default::default()
        };
        match self {
            RetrievalPolicy::SinceTimestamp(t) => lp.since_time = Some(t),
            RetrievalPolicy::TailLines(n) => lp.tail_lines = Some(n),
        }
        lp
    }
}
