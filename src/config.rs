use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Runtime settings, built once at startup and threaded through explicitly.
///
/// `kubeconfig` of `None` means the per-user default location (`$KUBECONFIG`
/// or `~/.kube/config`), resolved by the kube config loader itself.
#[derive(Debug, Clone)]
pub struct Settings {
    pub kubeconfig: Option<PathBuf>,
    pub listen: SocketAddr,
    pub timeout: Duration,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Settings {
            kubeconfig: cli.kubeconfig.clone(),
            listen: cli.listen,
            timeout: Duration::from_secs(cli.timeout),
        }
    }
}
