use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing_subscriber::EnvFilter;

use crate::terminal::logging::StatusFormatter;

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

pub fn get() -> &'static ProgressBar {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> ProgressBar {
    // Draw on stdout; indicatif hides the bar when stdout is not a tty,
    // so piped and CI output stays line-oriented.
    let pb: ProgressBar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
    let style: ProgressStyle = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Replaces the transient message shown next to the spinner.
pub fn status(msg: String) {
    get().set_message(msg);
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

/// Routes subscriber output above the live spinner line.
pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        get().println(msg.trim_end());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn init_logging(quiet: u8) {
    let default_directives: &str = if quiet >= 2 { "error" } else { "info" };
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .event_format(StatusFormatter)
        .with_env_filter(filter)
        .with_writer(|| SpinnerWriter)
        .init();
}
