use std::time::Duration;

use colored::*;
use reachr_common::success;
use unicode_width::UnicodeWidthStr;

use crate::terminal::spinner;

pub const TOTAL_WIDTH: usize = 64;

/// Writes a raw line above the spinner so an in-flight status message is
/// not clobbered.
pub fn print(msg: &str) {
    spinner::get().println(msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ REACHR v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    print(&format!("{sep}{text}{sep}"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{line}"));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{sep}"));
}

pub fn centerln(msg: &str) {
    let space: String =
        " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

/// Closing line for a fully successful run.
pub fn summary(ports_len: usize, total_time: Duration, quiet: u8) {
    let unit: &str = if ports_len == 1 { "port" } else { "ports" };
    let ports: ColoredString = format!("{ports_len} {unit}").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Reachability confirmed: {ports} reachable in {elapsed}");

    match quiet {
        0 => {
            fat_separator();
            centerln(&output);
        }
        _ => success!("{output}"),
    }
}
