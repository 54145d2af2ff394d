#![cfg(test)]
use reachr_common::config::Config;
use reachr_common::network::target::Target;
use reachr_core::probe::{self, ProbeOutcome};
use tokio::net::TcpListener;

fn loopback_target(port: u16) -> Target {
    Target {
        host: "127.0.0.1".to_string(),
        ports: vec![port],
    }
}

/// Binding port 0 hands out a free port; probing it must come back open.
#[tokio::test]
async fn probe_reports_open_for_listening_loopback_port() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port: u16 = listener.local_addr()?.port();
    let cfg = Config::default();

    let outcome = probe::probe_port(&loopback_target(port), port, cfg.probe_timeout).await;

    assert!(outcome.is_open(), "expected open, got: {outcome}");
    Ok(())
}

#[tokio::test]
async fn probe_reports_closed_once_the_listener_is_gone() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port: u16 = listener.local_addr()?.port();
    drop(listener);
    let cfg = Config::default();

    let outcome = probe::probe_port(&loopback_target(port), port, cfg.probe_timeout).await;

    assert!(matches!(outcome, ProbeOutcome::Closed { .. }));
    Ok(())
}

/// The probe accepts names, not just literals; "localhost" has to resolve
/// and connect to a listener bound on the loopback interface.
#[tokio::test]
async fn probe_resolves_hostnames_at_connect_time() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port: u16 = listener.local_addr()?.port();
    let cfg = Config::default();

    let target = Target {
        host: "localhost".to_string(),
        ports: vec![port],
    };
    let outcome = probe::probe_port(&target, port, cfg.probe_timeout).await;

    assert!(outcome.is_open(), "expected open, got: {outcome}");
    Ok(())
}
