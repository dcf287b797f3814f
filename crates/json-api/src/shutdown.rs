//! Stop the server on Ctrl+C or SIGTERM, letting in-flight requests finish.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
    time::Duration,
};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::{error, info};

/// Process signal that asks the server to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopSignal {
    Interrupt,
    Terminate,
}

impl Display for StopSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ShutdownError {
    #[error("cannot listen for {signal}: {source}")]
    Listen {
        signal: StopSignal,
        #[source]
        source: io::Error,
    },
}

async fn interrupt() -> Result<StopSignal, ShutdownError> {
    signal::ctrl_c()
        .await
        .map_err(|source| ShutdownError::Listen {
            signal: StopSignal::Interrupt,
            source,
        })?;

    Ok(StopSignal::Interrupt)
}

#[cfg(unix)]
async fn terminate() -> Result<StopSignal, ShutdownError> {
    let mut stream = signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(
        |source| ShutdownError::Listen {
            signal: StopSignal::Terminate,
            source,
        },
    )?;

    stream.recv().await;

    Ok(StopSignal::Terminate)
}

// Only Ctrl+C is delivered outside unix.
#[cfg(not(unix))]
async fn terminate() -> Result<StopSignal, ShutdownError> {
    std::future::pending().await
}

/// Resolve with the first stop signal received.
pub(crate) async fn wait_for_stop_signal() -> Result<StopSignal, ShutdownError> {
    tokio::select! {
        signal = interrupt() => signal,
        signal = terminate() => signal,
    }
}

/// Wait for a stop signal, then give in-flight requests `grace` to finish.
pub(crate) async fn stop_on_signal(handle: ServerHandle, grace: Duration) {
    match wait_for_stop_signal().await {
        Ok(signal) => {
            info!(
                %signal,
                grace_secs = grace.as_secs(),
                "stopping catalog server, draining in-flight requests"
            );

            handle.stop_graceful(Some(grace));
        }
        Err(listen_error) => {
            error!("catalog server will not stop on signals: {listen_error}");
        }
    }
}
