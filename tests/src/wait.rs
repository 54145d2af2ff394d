#![cfg(test)]
use std::time::Duration;

use reachr_common::network::target::Target;
use reachr_core::retry::{self, RetryPolicy, WaitError};
use tokio::net::TcpListener;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

fn loopback_target(port: u16) -> Target {
    Target {
        host: "127.0.0.1".to_string(),
        ports: vec![port],
    }
}

/// A port that is down for the first attempt and comes up during the first
/// backoff sleep must succeed on attempt 2.
#[tokio::test]
async fn wait_succeeds_once_the_port_starts_listening() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port: u16 = listener.local_addr()?.port();
    drop(listener);

    // Comes up partway through the 1s backoff after the first failure.
    let rebind = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        TcpListener::bind(("127.0.0.1", port)).await
    });

    let target = loopback_target(port);
    let mut retry_delays: Vec<Duration> = Vec::new();
    let attempts = retry::await_port(
        &target,
        port,
        &RetryPolicy::new(3),
        PROBE_TIMEOUT,
        |_, _, delay| retry_delays.push(delay),
    )
    .await?;

    assert_eq!(attempts, 2);
    assert_eq!(retry_delays, vec![Duration::from_secs(1)]);

    drop(rebind.await??);
    Ok(())
}

/// With a budget of two and a port that never opens, exactly two attempts
/// are made with a single 1s backoff in between, and the error carries the
/// endpoint and the attempt count. A follow-up port starts from a fresh
/// budget, the way the command loop walks its port list.
#[tokio::test]
async fn wait_exhausts_its_budget_then_the_next_port_starts_fresh() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let dead_port: u16 = listener.local_addr()?.port();
    drop(listener);

    let policy = RetryPolicy::new(2);
    let target = loopback_target(dead_port);
    let mut retry_delays: Vec<Duration> = Vec::new();
    let result = retry::await_port(&target, dead_port, &policy, PROBE_TIMEOUT, |_, _, delay| {
        retry_delays.push(delay)
    })
    .await;

    assert_eq!(retry_delays, vec![Duration::from_secs(1)]);
    match result {
        Err(WaitError::AttemptsExhausted {
            endpoint, attempts, ..
        }) => {
            assert_eq!(endpoint, format!("127.0.0.1:{dead_port}"));
            assert_eq!(attempts, 2);
        }
        Ok(attempts) => panic!("port unexpectedly open after {attempts} attempts"),
    }

    let live_listener = TcpListener::bind("127.0.0.1:0").await?;
    let live_port: u16 = live_listener.local_addr()?.port();
    let target = loopback_target(live_port);
    let attempts =
        retry::await_port(&target, live_port, &policy, PROBE_TIMEOUT, |_, _, _| {}).await?;

    assert_eq!(attempts, 1);
    Ok(())
}
