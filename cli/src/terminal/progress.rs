use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Turns `span` into a bar counting reverse lookups.
pub fn prepare(span: &Span, total: u64, no_dns: bool) {
    let style = ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░")
        .tick_strings(TICKS);

    span.pb_set_style(&style);
    span.pb_set_length(total);
    span.pb_set_message(if no_dns {
        "Collecting addresses"
    } else {
        "Resolving hostnames"
    });
}
