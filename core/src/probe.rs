use std::fmt;
use std::io;
use std::time::Duration;

use reachr_common::network::target::Target;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// What a single connection attempt found.
///
/// Everything that is not [`Open`](Self::Open) counts as failed; the variant
/// only records why, for the printed line. Errors are carried as data instead
/// of being thrown, so callers branch on the outcome rather than catching.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The TCP handshake completed within the timeout.
    Open,
    /// The remote end, the network or the resolver returned an error.
    Closed { error: io::Error },
    /// No answer before the timeout elapsed.
    Filtered,
}

impl ProbeOutcome {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed { error } => write!(f, "closed: {error}"),
            Self::Filtered => write!(f, "filtered: connect timed out"),
        }
    }
}

/// Attempts one TCP connect to `target`:`port`, bounded by `probe_timeout`.
///
/// The stream is dropped as soon as the handshake finishes; nothing is ever
/// sent on the wire.
pub async fn probe_port(target: &Target, port: u16, probe_timeout: Duration) -> ProbeOutcome {
    let endpoint: String = target.endpoint(port);

    match timeout(probe_timeout, TcpStream::connect(endpoint.as_str())).await {
        Ok(Ok(stream)) => {
            drop(stream);
            ProbeOutcome::Open
        }
        Ok(Err(error)) => {
            debug!("connect to {endpoint} failed: {error}");
            ProbeOutcome::Closed { error }
        }
        Err(_elapsed) => ProbeOutcome::Filtered,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
