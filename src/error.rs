use thiserror::Error;

/// Failures along the log retrieval pipeline.
///
/// Each stage reports distinctly so a caller can tell a bad kubeconfig apart
/// from a refused stream. Nothing is retried: a failure at any stage aborts
/// the request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The kubeconfig could not be read, or the named context is unknown.
    #[error("failed to resolve cluster context: {0}")]
    Resolution(#[source] kube::config::KubeconfigError),

    /// The resolved config could not be turned into a client.
    #[error("failed to build cluster client: {0}")]
    Connectivity(#[source] kube::Error),

    /// The remote side refused to open the log stream (unknown pod,
    /// unknown container, authorization, ...).
    #[error("failed to open log stream: {0}")]
    StreamOpen(#[source] kube::Error),

    /// The stream failed mid-read. Any partially aggregated output has been
    /// discarded.
    #[error("log stream failed: {0}")]
    Stream(#[source] std::io::Error),
}
