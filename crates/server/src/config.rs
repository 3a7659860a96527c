//! Command-line configuration for the server.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing_subscriber::EnvFilter;

/// flood-dashboard: report flood cases on a map of Kenya
#[derive(Parser, Debug, Clone)]
#[command(name = "flood-dashboard")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8050)]
    pub port: u16,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Log filter, `RUST_LOG` wins over `--debug`.
    pub fn log_filter(&self) -> EnvFilter {
        let default = if self.debug { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}
