//! Web server for the meeting notes dashboard
#![forbid(unsafe_code)]

use meetnotes_core::{Config, init_logging};
use meetnotes_web::{WebError, build_app};
use std::net::{IpAddr, SocketAddr};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), WebError> {
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Logging needs the config, so a load failure is reported once it is up
    init_logging(&config.logging)?;
    if let Err(e) = &loaded {
        warn!("Failed to load config: {}, using defaults", e);
    }

    let host: IpAddr = config
        .web
        .host
        .parse()
        .map_err(|source| WebError::InvalidHost {
            host: config.web.host.clone(),
            source,
        })?;
    let addr = SocketAddr::new(host, config.web.port);

    info!(api_origin = %config.api.origin, "Using meeting notes backend");
    info!("Starting meeting notes web server on {}", addr);

    let app = build_app(config)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
