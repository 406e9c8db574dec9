use std::io;
use std::path::Path;

use chrono::Utc;
use k8s_openapi::api::core::v1::Pod;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use tracing::{debug, info};

use crate::aggregate::{aggregate, read_chunks};
use crate::config::Settings;
use crate::error::FetchError;
use crate::policy::RetrievalPolicy;
use crate::types::{LogQuery, LogRecord};

/// Resolves connectivity for the named context from the kubeconfig.
///
/// An empty context name selects the kubeconfig's current context. Resolution
/// happens fresh on every call; nothing is cached across requests.
pub async fn resolve_connection(
    context: &str,
    kubeconfig_path: Option<&Path>,
) -> Result<Config, FetchError> {
    let kubeconfig = match kubeconfig_path {
        Some(path) => Kubeconfig::read_from(path).map_err(FetchError::Resolution)?,
        None => Kubeconfig::read().map_err(FetchError::Resolution)?,
    };
    let options = KubeConfigOptions {
        context: (!context.is_empty()).then(|| context.to_string()),
        ..Default::default()
    };
    Config::from_custom_kubeconfig(kubeconfig, &options)
        .await
        .map_err(FetchError::Resolution)
}

/// Turns a resolved config into a workload client. Construction is purely
/// local; the connection is not exercised until the stream is opened.
pub fn build_client(config: Config) -> Result<Client, FetchError> {
    Client::try_from(config).map_err(FetchError::Connectivity)
}

/// Retrieves and aggregates the logs described by `query`.
///
/// The capture timestamp is taken immediately before the stream request is
/// issued. Both the stream open and the read loop run under the configured
/// deadline; expiry reports as a stream failure.
pub async fn fetch_logs(settings: &Settings, query: &LogQuery) -> Result<LogRecord, FetchError> {
    let config = resolve_connection(&query.cluster_name, settings.kubeconfig.as_deref()).await?;
    let client = build_client(config)?;
    let pods: Api<Pod> = Api::namespaced(client, &query.service_name);

    let policy = RetrievalPolicy::from_since_time(query.since_time.as_deref());
    debug!(
        "Fetching logs for {}/{} container {} with {:?}",
        query.service_name, query.pod_name, query.container_name, policy
    );
    let params = policy.into_log_params(&query.container_name);

    let captured_at = Utc::now();
    let logs = tokio::time::timeout(settings.timeout, async {
        let reader = pods
            .log_stream(&query.pod_name, &params)
            .await
            .map_err(FetchError::StreamOpen)?;
        aggregate(read_chunks(reader)).await
    })
    .await
    .map_err(|_| {
        FetchError::Stream(io::Error::new(
            io::ErrorKind::TimedOut,
            format!("log stream did not complete within {:?}", settings.timeout),
        ))
    })??;

    info!(
        "Aggregated {} bytes of logs for {}/{} container {}",
        logs.len(),
        query.service_name,
        query.pod_name,
        query.container_name
    );
    Ok(LogRecord::assemble(query, captured_at, logs))
}
