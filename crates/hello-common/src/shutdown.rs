//! Graceful-stop trigger shared by both replicas.

use std::fmt;

use tracing::{info, warn};

/// The signal that ended a replica.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    /// Ctrl-C in a terminal, or `docker compose` in the foreground.
    Interrupt,
    /// `docker stop` and compose scale-down.
    Terminate,
}

impl StopSignal {
    pub fn name(self) -> &'static str {
        match self {
            StopSignal::Interrupt => "SIGINT",
            StopSignal::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wait for SIGINT or SIGTERM, then log which one stopped `service`.
///
/// A handler that fails to install is logged and never fires, so the other
/// signal still stops the replica.
pub async fn wait_for_stop(service: &'static str) -> StopSignal {
    let interrupt = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => StopSignal::Interrupt,
            Err(e) => {
                warn!(service, error = %e, "SIGINT handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                StopSignal::Terminate
            }
            Err(e) => {
                warn!(service, error = %e, "SIGTERM handler unavailable");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<StopSignal>();

    let received = tokio::select! {
        s = interrupt => s,
        s = terminate => s,
    };

    info!(service, signal = %received, "stopping; draining open connections");
    received
}

/// [`wait_for_stop`] shaped for `axum::serve(..).with_graceful_shutdown`.
pub async fn signal(service: &'static str) {
    wait_for_stop(service).await;
}
