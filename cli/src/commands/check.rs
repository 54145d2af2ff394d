use std::time::Instant;

use anyhow::bail;
use colored::*;
use reachr_common::config::Config;
use reachr_common::network::target::Target;
use reachr_common::{info, success};
use reachr_core::probe::{self, ProbeOutcome};
use tracing::error;

use crate::terminal::{print, spinner};

/// Probes every port once, in order, stopping at the first failure.
pub async fn check(target: Target, cfg: &Config) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    for &port in &target.ports {
        let endpoint: String = target.endpoint(port);
        info!("testing {endpoint}");
        spinner::status(format!("waiting for {endpoint}"));

        let outcome: ProbeOutcome = probe::probe_port(&target, port, cfg.probe_timeout).await;
        if outcome.is_open() {
            success!("{endpoint} {}", "OK".green().bold());
        } else {
            error!("{endpoint} {} ({outcome})", "FAILED".red().bold());
            bail!("{endpoint} is unreachable");
        }
    }

    print::summary(target.ports.len(), start_time.elapsed(), cfg.quiet);
    Ok(())
}
