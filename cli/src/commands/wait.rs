use std::time::Instant;

use colored::*;
use reachr_common::config::Config;
use reachr_common::network::target::Target;
use reachr_common::{info, success, warn};
use reachr_core::retry::{self, RetryPolicy};
use tracing::error;

use crate::terminal::{print, spinner};

/// Probes every port in order, retrying each with a growing backoff until
/// it opens or its attempt budget runs out.
pub async fn wait(target: Target, max_attempts: u32, cfg: &Config) -> anyhow::Result<()> {
    let policy: RetryPolicy = RetryPolicy::new(max_attempts);
    let max_attempts: u32 = policy.max_attempts();
    let start_time: Instant = Instant::now();

    for &port in &target.ports {
        let endpoint: String = target.endpoint(port);
        info!("testing {endpoint}");
        spinner::status(format!("waiting for {endpoint}"));

        let result = retry::await_port(
            &target,
            port,
            &policy,
            cfg.probe_timeout,
            |attempt, outcome, delay| {
                warn!(
                    "{endpoint} {outcome} (attempt {attempt}/{max_attempts}), retrying in {}s",
                    delay.as_secs()
                );
                spinner::status(format!(
                    "backing off {}s before attempt {}/{max_attempts} against {endpoint}",
                    delay.as_secs(),
                    attempt + 1
                ));
            },
        )
        .await;

        match result {
            Ok(attempts) => {
                let unit: &str = if attempts == 1 { "attempt" } else { "attempts" };
                success!("{endpoint} {} after {attempts} {unit}", "OK".green().bold());
            }
            Err(err) => {
                error!("{endpoint} {}", "FAILED".red().bold());
                return Err(err.into());
            }
        }
    }

    print::summary(target.ports.len(), start_time.elapsed(), cfg.quiet);
    Ok(())
}
