//! Greeting lookups against the store.
//!
//! The lookups run strictly in order; the first failure aborts the rest and
//! the messages gathered so far are dropped. Status codes are not this
//! module's concern, see [`crate::routes::hello`].

use tracing::debug;

use crate::db::GreetingStore;
use crate::error::DataAccessError;

/// Value round-tripped through the store to prove connectivity.
pub const ECHO_PROBE: &str = "Connected to DB";

pub struct GreetingRepository<'a> {
    store: &'a dyn GreetingStore,
    host: &'a str,
}

impl<'a> GreetingRepository<'a> {
    pub fn new(store: &'a dyn GreetingStore, host: &'a str) -> Self {
        Self { store, host }
    }

    /// Run the lookup sequence and collect one status string per step.
    pub async fn fetch_greetings(&self) -> Result<Vec<String>, DataAccessError> {
        let host = self.host;
        let mut messages = vec![format!(
            "Connecting to DB ({}) from api ({host})",
            self.store.target()
        )];

        let echoed = self.store.echo(ECHO_PROBE).await?;
        debug!(%echoed, "store round-trip ok");
        messages.push(format!("{echoed} from api ({host})"));

        let record = self.store.first_greeting().await?;
        messages.push(record.message);

        Ok(messages)
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::db::GreetingRecord;

    /// In-memory store. `greeting: None` behaves like an empty `hello` table.
    pub(crate) struct FakeStore {
        pub reachable: bool,
        pub greeting: Option<String>,
        pub calls: Mutex<Vec<&'static str>>,
    }

    impl FakeStore {
        pub(crate) fn with_greeting(message: &str) -> Self {
            Self {
                reachable: true,
                greeting: Some(message.to_owned()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn unreachable() -> Self {
            Self {
                reachable: false,
                greeting: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: &'static str) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
        }

        fn refused() -> sqlx::Error {
            sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))
        }
    }

    #[async_trait]
    impl GreetingStore for FakeStore {
        fn target(&self) -> &str {
            "db"
        }

        async fn echo(&self, value: &str) -> Result<String, sqlx::Error> {
            self.record("echo");
            if !self.reachable {
                return Err(Self::refused());
            }
            Ok(value.to_owned())
        }

        async fn first_greeting(&self) -> Result<GreetingRecord, sqlx::Error> {
            self.record("first_greeting");
            if !self.reachable {
                return Err(Self::refused());
            }
            self.greeting
                .clone()
                .map(|message| GreetingRecord { message })
                .ok_or(sqlx::Error::RowNotFound)
        }
    }

    #[tokio::test]
    async fn collects_three_messages_in_order() {
        let store = FakeStore::with_greeting("hi");
        let messages = GreetingRepository::new(&store, "api-1")
            .fetch_greetings()
            .await
            .unwrap();
        assert_eq!(
            messages,
            vec![
                "Connecting to DB (db) from api (api-1)",
                "Connected to DB from api (api-1)",
                "hi",
            ]
        );
        assert_eq!(*store.calls.lock().unwrap(), vec!["echo", "first_greeting"]);
    }

    #[tokio::test]
    async fn refused_connection_aborts_before_table_read() {
        let store = FakeStore::unreachable();
        let err = GreetingRepository::new(&store, "api-1")
            .fetch_greetings()
            .await
            .unwrap_err();
        assert!(matches!(err.0, sqlx::Error::Io(_)));
        assert_eq!(*store.calls.lock().unwrap(), vec!["echo"]);
    }

    #[tokio::test]
    async fn empty_table_is_a_data_access_error() {
        let store = FakeStore {
            reachable: true,
            greeting: None,
            calls: Mutex::new(Vec::new()),
        };
        let err = GreetingRepository::new(&store, "api-1")
            .fetch_greetings()
            .await
            .unwrap_err();
        assert!(matches!(err.0, sqlx::Error::RowNotFound));
    }
}
