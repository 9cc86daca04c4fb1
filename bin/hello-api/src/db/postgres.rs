//! Postgres implementation of [`GreetingStore`].
//!
//! The pool is created lazily: no connection is attempted until the first
//! request, so the API comes up (and answers with the degraded payload) even
//! while the database container is still starting.
//!
//! sqlx keeps re-dialling a refused connection until the acquire timeout, and
//! then only reports `PoolTimedOut`. The timeout is therefore short
//! (`DB_ACQUIRE_TIMEOUT_MS`), and a timed-out acquire is explained by one
//! direct connection attempt whose error replaces `PoolTimedOut`.
//!
//! The `sqlx::query` (runtime-verified) form is used so that no
//! `DATABASE_URL` environment variable is needed at compile time.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgPool, PgPoolOptions};
use sqlx::Connection;
use tracing::warn;

use super::{GreetingRecord, GreetingStore};
use crate::config::DbConfig;

/// Postgres-backed greeting store.
#[derive(Clone)]
pub struct PgGreetingStore {
    pool: PgPool,
    options: PgConnectOptions,
    acquire_timeout: Duration,
    target: String,
}

impl std::fmt::Debug for PgGreetingStore {
    // PgConnectOptions' Debug output includes the password.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgGreetingStore")
            .field("target", &self.target)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl PgGreetingStore {
    /// Build a lazily-connecting pool from the `DB_*` settings.
    pub fn connect_lazy(cfg: &DbConfig) -> Self {
        let mut options = PgConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port)
            .database(&cfg.database)
            .username(&cfg.user);
        if let Some(password) = &cfg.password {
            options = options.password(password);
        }
        let pool = PgPoolOptions::new()
            .acquire_timeout(cfg.acquire_timeout)
            .connect_lazy_with(options.clone());
        Self {
            pool,
            options,
            acquire_timeout: cfg.acquire_timeout,
            target: cfg.host.clone(),
        }
    }

    /// Replace `PoolTimedOut` with the reason the pool could not connect.
    async fn explain(&self, err: sqlx::Error) -> sqlx::Error {
        if !matches!(err, sqlx::Error::PoolTimedOut) {
            return err;
        }
        let attempt = tokio::time::timeout(
            self.acquire_timeout,
            PgConnection::connect_with(&self.options),
        )
        .await;
        match attempt {
            Ok(Err(cause)) => {
                warn!(db = %self.target, error = %cause, "pool acquire timed out");
                cause
            }
            Ok(Ok(conn)) => {
                // The database is reachable; the pool was just saturated.
                conn.close().await.ok();
                err
            }
            Err(_) => err,
        }
    }
}

#[async_trait]
impl GreetingStore for PgGreetingStore {
    fn target(&self) -> &str {
        &self.target
    }

    async fn echo(&self, value: &str) -> Result<String, sqlx::Error> {
        let result = sqlx::query_scalar::<_, String>("SELECT $1 AS message")
            .bind(value)
            .fetch_one(&self.pool)
            .await;
        match result {
            Ok(echoed) => Ok(echoed),
            Err(e) => Err(self.explain(e).await),
        }
    }

    async fn first_greeting(&self) -> Result<GreetingRecord, sqlx::Error> {
        let result = sqlx::query_as::<_, GreetingRecord>("SELECT message FROM hello LIMIT 1")
            .fetch_one(&self.pool)
            .await;
        match result {
            Ok(record) => Ok(record),
            Err(e) => Err(self.explain(e).await),
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Instant;

    use super::*;

    /// Store built from production settings, pointed at a port nothing
    /// listens on.
    fn unreachable_store() -> PgGreetingStore {
        PgGreetingStore::connect_lazy(&DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            database: "postgres".into(),
            user: "postgres".into(),
            password: Some("secret".into()),
            acquire_timeout: crate::config::DEFAULT_ACQUIRE_TIMEOUT,
        })
    }

    #[tokio::test]
    async fn refused_connection_fails_fast_with_io_error() {
        let store = unreachable_store();
        let started = Instant::now();
        let err = store.echo("Connected to DB").await.unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(matches!(err, sqlx::Error::Io(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn table_read_reports_refused_connection() {
        let err = unreachable_store().first_greeting().await.unwrap_err();
        assert!(matches!(err, sqlx::Error::Io(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn debug_output_omits_password() {
        let rendered = format!("{:?}", unreachable_store());
        assert!(rendered.contains("127.0.0.1"));
        assert!(!rendered.contains("secret"));
    }
}
