//! Status-line macros shared by every crate in the workspace.
//!
//! They forward to [`tracing`] events, so library code never writes to the
//! terminal itself; the CLI's subscriber decides how a line is rendered.

/// Neutral progress line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Positive result line.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Recoverable problem line.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
