use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "podlog-gateway")]
#[command(about = "HTTP gateway serving aggregated container logs from Kubernetes clusters")]
pub struct Cli {
    /// Path to the kubeconfig file (defaults to the per-user location)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,

    /// Deadline in seconds for a single log retrieval
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
