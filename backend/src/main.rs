//! Service entry-point: wires configuration, persistence, and REST endpoints.

mod server;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::AppConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::load()
        .map_err(|err| std::io::Error::other(format!("could not load configuration: {err}")))?;

    let server = server::create_server(config).await?;
    server.await
}
