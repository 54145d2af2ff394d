//! # Probe Target Model
//!
//! A target is the host under test plus the ordered list of ports to probe
//! against it. Ports come in as one or more [`PortSet`] arguments and are
//! flattened in the order they were written; that order is the probe order,
//! and duplicates are kept.

use std::net::Ipv6Addr;

use crate::network::port::PortSet;
use crate::success;

/// A host and the ports to probe on it, in invocation order.
#[derive(Clone, Debug)]
pub struct Target {
    /// Hostname, IPv4 or IPv6 literal. Resolution happens at connect time;
    /// a name that does not resolve surfaces as a failed probe.
    pub host: String,
    pub ports: Vec<u16>,
}

impl Target {
    pub fn new(host: String, sets: Vec<PortSet>) -> Self {
        let ports: Vec<u16> = sets
            .iter()
            .flat_map(|set| set.ports().iter().copied())
            .collect();

        let len: usize = ports.len();
        let unit: &str = if len == 1 { "port" } else { "ports" };
        success!("{len} {unit} queued against {host}");

        Self { host, ports }
    }

    /// Renders `host:port` for connecting and printing.
    ///
    /// Bare IPv6 literals get bracketed so the pair stays resolvable
    /// (`[::1]:80`, not `::1:80`).
    pub fn endpoint(&self, port: u16) -> String {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.host, port)
        } else {
            format!("{}:{}", self.host, port)
        }
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
