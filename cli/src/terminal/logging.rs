use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Renders every event as a single `[x] message` status line.
pub struct StatusFormatter;

fn level_symbol(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::ERROR => "[-]".red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for StatusFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", level_symbol(*event.metadata().level()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
