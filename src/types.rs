use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by the log retrieval endpoint.
///
/// `service_name` doubles as the namespace the pod lives in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    pub service_name: String,
    pub pod_name: String,
    pub container_name: String,
    pub cluster_name: String,
    #[serde(default)]
    pub since_time: Option<String>,
}

/// The fully aggregated log document returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub service_name: String,
    pub cluster_name: String,
    pub pod_name: String,
    pub container_name: String,
    pub last_timestamp: DateTime<Utc>,
    pub logs: String,
}

impl LogRecord {
    /// Packages the aggregated text with the request identifiers.
    /// `captured_at` is the instant the stream request was issued.
    pub fn assemble(query: &LogQuery, captured_at: DateTime<Utc>, logs: String) -> Self {
        LogRecord {
            service_name: query.service_name.clone(),
            cluster_name: query.cluster_name.clone(),
            pod_name: query.pod_name.clone(),
            container_name: query.container_name.clone(),
            last_timestamp: captured_at,
            logs,
        }
    }
}
