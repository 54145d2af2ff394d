pub mod config;
mod macros;
pub mod network;

#[doc(hidden)]
pub use tracing;
