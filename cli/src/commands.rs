pub mod check;
pub mod wait;

use clap::{ArgAction, Parser, Subcommand};
use reachr_common::config::DEFAULT_TIMEOUT_SECS;
use reachr_common::network::port::PortSet;

#[derive(Parser)]
#[command(name = "reachr")]
#[command(about = "Tests TCP reachability to a host across a list of ports.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Per-probe connect timeout in seconds
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Less output (-q drops the decor, -qq keeps errors only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the version banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe each port once, stopping at the first failure
    #[command(alias = "c")]
    Check {
        /// Hostname, IPv4 or IPv6 address
        host: String,
        /// Ports to probe, in order: single, comma list or range (e.g. 22 80,443 8000-8010)
        #[arg(required = true)]
        ports: Vec<PortSet>,
    },
    /// Keep retrying unreachable ports with a growing backoff
    #[command(alias = "w")]
    Wait {
        /// Hostname, IPv4 or IPv6 address
        host: String,
        /// Ports to probe, in order: single, comma list or range (e.g. 22 80,443 8000-8010)
        #[arg(required = true)]
        ports: Vec<PortSet>,
        /// Maximum connection attempts per port
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        attempts: u32,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
