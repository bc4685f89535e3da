use lantern_ircd::{ClientServer, ServerConfig};

use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab")]
struct Opts {
    /// Password for the OPER command; overrides the config file
    #[structopt(short, long)]
    oper_password: Option<String>,

    /// Port to listen on, on all interfaces, when the config file names no
    /// listen addresses
    #[structopt(short, long, default_value = "6667")]
    port: u16,

    /// Server config file location
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Log more; repeat for more detail
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Log only errors
    #[structopt(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Opts {
    fn default_log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

/// Main entry point.
///
/// `RUST_LOG`, if set, takes precedence over the verbosity options.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let opts = Opts::from_args();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(opts.default_log_level()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = match &opts.config {
        Some(path) => ServerConfig::load_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(password) = opts.oper_password {
        config.oper_password = Some(password);
    }

    let listen_addrs = if config.listen.is_empty() {
        vec![SocketAddr::from((Ipv4Addr::UNSPECIFIED, opts.port))]
    } else {
        config.listen.clone()
    };

    let server = Arc::new(ClientServer::new(config).context("Invalid server configuration")?);

    // Listeners stop accepting when dropped
    let mut listeners = Vec::new();
    for addr in listen_addrs {
        let listener = server
            .listen(addr)
            .await
            .with_context(|| format!("Couldn't listen on {}", addr))?;
        listeners.push(listener);
    }

    tracing::info!(name = %server.name(), version = lantern_ircd::server::VERSION, "Server starting");

    tokio::select! {
        _ = server.run() => {}
        res = tokio::signal::ctrl_c() => {
            res.context("Couldn't wait for interrupt")?;
            tracing::info!("Interrupted; shutting down");
        }
    }

    for listener in &listeners {
        listener.close();
    }

    Ok(())
}
