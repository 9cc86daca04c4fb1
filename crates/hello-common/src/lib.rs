//! Pieces shared by `hello-api` and `hello-web`.
//!
//! - [`greeting`]: the JSON body exchanged on `GET /api/hello`.
//! - [`host`]: how a process names itself in greeting strings.
//! - [`logging`]: tracing subscriber setup used by both binaries.
//! - [`shutdown`]: SIGINT / SIGTERM future for graceful shutdown.

pub mod greeting;
pub mod host;
pub mod logging;
pub mod shutdown;

pub use greeting::{GreetingResponse, INTERNAL_SERVER_ERROR};
pub use host::host_identity;
