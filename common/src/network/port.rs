//! # Port Selection Model
//!
//! Defines the ports a single command-line argument can select.
//!
//! This module handles parsing and representing port selections, which can be:
//! * A single port (e.g., `80`).
//! * A comma-separated list (e.g., `80,443,8080`).
//! * An inclusive range (e.g., `8000-8010`).
//! * Any mix of the above (e.g., `22,80,8000-8010`).

use std::str::FromStr;

use thiserror::Error;

/// An ordered, non-empty collection of ports parsed from one argument.
///
/// Order is preserved exactly as written; it becomes the probe order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortSet {
    ports: Vec<u16>,
}

impl PortSet {
    pub fn ports(&self) -> &[u16] {
        &self.ports
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortParseError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("invalid port range: {start}-{end}")]
    ReversedRange { start: u16, end: u16 },
    #[error("no ports given")]
    Empty,
}

impl FromStr for PortSet {
    type Err = PortParseError;

    /// Parses a string into a `PortSet`.
    ///
    /// Empty comma segments are skipped and whitespace around every part is
    /// ignored, so `"22, 80,"` parses the same as `"22,80"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ports: Vec<u16> = Vec::new();

        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            if let Some((start_str, end_str)) = part.split_once('-') {
                let start: u16 = parse_port(start_str)?;
                let end: u16 = parse_port(end_str)?;

                if start > end {
                    return Err(PortParseError::ReversedRange { start, end });
                }

                ports.extend(start..=end);
            } else {
                ports.push(parse_port(part)?);
            }
        }

        if ports.is_empty() {
            return Err(PortParseError::Empty);
        }

        Ok(Self { ports })
    }
}

fn parse_port(s: &str) -> Result<u16, PortParseError> {
    let s = s.trim();
    s.parse::<u16>()
        .map_err(|_| PortParseError::InvalidPort(s.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
