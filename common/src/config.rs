use std::time::Duration;

/// Per-probe connect timeout applied when the command line does not
/// override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings threaded from the command line into the commands.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Upper bound for a single connection attempt.
    ///
    /// Always explicit; there is no process-wide default timeout state.
    pub probe_timeout: Duration,
    /// 0 prints everything, 1 drops the decor, 2 keeps errors only.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            probe_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            quiet: 0,
        }
    }
}
