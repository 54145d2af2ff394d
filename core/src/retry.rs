use std::time::Duration;

use reachr_common::network::target::Target;
use thiserror::Error;
use tokio::time::sleep;
use tracing::debug;

use crate::probe::{self, ProbeOutcome};

/// Bounds the retry loop for a single port.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    /// A zero budget is treated as one attempt; a port cannot be probed
    /// less than once.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Quadratic backoff: the n-th failed attempt waits n² seconds.
    pub fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_secs(u64::from(attempt).pow(2))
    }
}

#[derive(Debug, Error)]
pub enum WaitError {
    #[error("{endpoint} still unreachable after {attempts} attempts ({last})")]
    AttemptsExhausted {
        endpoint: String,
        attempts: u32,
        last: ProbeOutcome,
    },
}

/// Probes `port` until it opens or the policy's attempt budget runs out,
/// returning the number of attempts it took.
///
/// `on_retry` fires before each backoff sleep with the attempt number that
/// just failed, its outcome and the upcoming delay. The attempt counter
/// starts at 1; callers walking several ports get a fresh budget per port.
pub async fn await_port<F>(
    target: &Target,
    port: u16,
    policy: &RetryPolicy,
    probe_timeout: Duration,
    mut on_retry: F,
) -> Result<u32, WaitError>
where
    F: FnMut(u32, &ProbeOutcome, Duration),
{
    let mut attempt: u32 = 1;

    loop {
        let outcome: ProbeOutcome = probe::probe_port(target, port, probe_timeout).await;
        if outcome.is_open() {
            return Ok(attempt);
        }

        if attempt >= policy.max_attempts() {
            return Err(WaitError::AttemptsExhausted {
                endpoint: target.endpoint(port),
                attempts: attempt,
                last: outcome,
            });
        }

        let delay: Duration = policy.backoff(attempt);
        on_retry(attempt, &outcome, delay);
        debug!(
            "attempt {attempt}/{} against {} failed, sleeping {delay:?}",
            policy.max_attempts(),
            target.endpoint(port)
        );
        sleep(delay).await;
        attempt += 1;
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
