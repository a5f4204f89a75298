//! Contacts backend entry-point: loads settings, prepares storage, and serves
//! the REST API.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::io;
use std::path::Path;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use zeroize::Zeroizing;

use contacts_backend::inbound::http::health::HealthState;
use contacts_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use contacts_backend::settings::ContactsSettings;
use server::{ServerConfig, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

fn load_session_key(path: &Path, allow_ephemeral: bool) -> io::Result<Key> {
    match std::fs::read(path) {
        Ok(bytes) => {
            let bytes = Zeroizing::new(bytes);
            Key::try_from(bytes.as_slice()).map_err(|e| {
                io::Error::other(format!(
                    "session key at {} is unusable: {e}",
                    path.display()
                ))
            })
        }
        Err(e) if cfg!(debug_assertions) || allow_ephemeral => {
            warn!(path = %path.display(), error = %e, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        Err(e) => Err(io::Error::other(format!(
            "failed to read session key at {}: {e}",
            path.display()
        ))),
    }
}

async fn connect_database(database_url: &str) -> io::Result<DbPool> {
    run_pending_migrations(database_url)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| io::Error::other(e.to_string()))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let settings = ContactsSettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let allow_ephemeral = settings
        .session_allow_ephemeral()
        .map_err(io::Error::other)?;
    let cookie_secure = settings.session_cookie_secure().map_err(io::Error::other)?;
    let key = load_session_key(&settings.session_key_file(), allow_ephemeral)?;

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr);
    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(connect_database(database_url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "contacts server listening");
    server.await
}
