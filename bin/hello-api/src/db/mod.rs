//! Database abstraction layer.
//!
//! [`GreetingStore`] exposes the only two query shapes the service needs: a
//! parameterised echo and a first-row read of the `hello` table. The default
//! implementation is [`postgres::PgGreetingStore`]; tests substitute an
//! in-memory fake.
//!
//! The trait is object-safe (via `async-trait`) so [`crate::state::AppState`]
//! can hold it as `Arc<dyn GreetingStore>`.

pub mod postgres;

use async_trait::async_trait;

/// A single row of the `hello` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct GreetingRecord {
    pub message: String,
}

#[async_trait]
pub trait GreetingStore: Send + Sync + 'static {
    /// Human-readable connection target, e.g. the database host.
    fn target(&self) -> &str;

    /// Round-trip `value` through the store (`SELECT $1 AS message`).
    async fn echo(&self, value: &str) -> Result<String, sqlx::Error>;

    /// Read the first row of the `hello` table.
    ///
    /// An empty table yields [`sqlx::Error::RowNotFound`].
    async fn first_greeting(&self) -> Result<GreetingRecord, sqlx::Error>;
}
