use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rookery_proto::Server;
use rookery_session::RegistryConfig;

fn main() -> Result<()> {
    // stdout carries protocol responses only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = RegistryConfig::default();
    info!(
        max_sessions = config.max_sessions,
        auto_apply_reply = config.auto_apply_reply,
        "rookery starting"
    );
    Server::with_output(config, std::io::stdout()).run()?;
    Ok(())
}
