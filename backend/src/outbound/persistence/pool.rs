//! `bb8` pool of `diesel-async` PostgreSQL connections.
//!
//! Checkout is async and bounded by the configured timeout; every failure is
//! surfaced as a [`PoolError`] that repositories translate into their port
//! error.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use tracing::info;

/// Pool construction and checkout failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available within the checkout timeout.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool could not be built from the supplied URL.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    pub(crate) fn into_message(self) -> String {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Sizing and timeout knobs for [`DbPool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Default number of pooled connections.
    pub const DEFAULT_MAX_SIZE: u32 = 8;
    /// Default checkout timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Configuration for `database_url` with default sizing.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: Self::DEFAULT_MAX_SIZE,
            connection_timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Override the maximum number of connections.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Override the checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Connection URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Shared handle to the connection pool; cheap to clone.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool and open its first connections.
    ///
    /// # Errors
    /// [`PoolError::Build`] when the URL is invalid or the database refuses
    /// the initial connections.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url());
        let inner = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::Build {
                message: err.to_string(),
            })?;
        info!(max_size = config.max_size, "database pool ready");
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    /// [`PoolError::Checkout`] when no connection frees up in time.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner.get().await.map_err(|err| PoolError::Checkout {
            message: err.to_string(),
        })
    }
}
