use std::time::{Duration, Instant};

use chrono::Local;
use colored::*;
use tracing::{info, info_span, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::mprint;
use crate::terminal::{colors, print, progress, prompt};
use rimdiff_common::config::{Config, InventorySource};
use rimdiff_core::diff::DiffService;
use rimdiff_core::reconcile::Reconciliation;
use rimdiff_core::report::Report;
use rimdiff_core::sink;
use rimdiff_core::sources::{self, Credentials};

/// How many times the user is asked for credentials before giving up.
const MAX_AUTH_ATTEMPTS: usize = 3;

pub fn diff(cfg: &Config) -> anyhow::Result<()> {
    if cfg.explicit {
        print_settings(cfg);
    }

    print::header("gathering addresses", false);
    print::aligned_line("Radmind", cfg.radmind_file.display().to_string());
    let radmind_text = sources::read_radmind(&cfg.radmind_file)?;

    print::aligned_line("InterMapper", cfg.inventory.to_string());
    let inventory_text = load_inventory(&cfg.inventory)?;

    let start_time: Instant = Instant::now();
    let service = DiffService::for_config(cfg);
    let lists = service.collect(&radmind_text, &inventory_text, cfg)?;
    info!(
        "{} Radmind and {} InterMapper addresses collected",
        lists.radmind.len(),
        lists.intermapper.len()
    );

    let span = info_span!("resolution", indicatif.pb_show = true);
    progress::prepare(&span, lists.distinct().len() as u64, cfg.no_dns);
    let reconciliation = {
        let _guard = span.enter();
        let tick = || span.pb_inc(1);
        service.reconcile(lists, cfg, Some(&tick))
    };
    drop(span);

    let report = Report::new(&reconciliation, cfg);
    if !cfg.quiet {
        print_report(&report);
    }

    let generated = Local::now();
    if let Some(path) = &cfg.output_file {
        sink::write_report(path, &report, generated)?;
        info!("Results recorded in {}", path.display());
    }
    if let Some(mail) = &cfg.mail {
        sink::send_mail(mail, &report, generated)?;
        info!("Results mailed to {}", mail.recipients.join(", "));
    }

    print_summary(&reconciliation, start_time.elapsed());
    Ok(())
}

fn load_inventory(source: &InventorySource) -> anyhow::Result<String> {
    let url = match source {
        InventorySource::File(path) => return Ok(sources::read_inventory_file(path)?),
        InventorySource::Http(url) => url,
    };

    let mut credentials: Option<Credentials> = None;
    let mut attempts: usize = 0;
    loop {
        match sources::fetch_inventory(url, credentials.as_ref()) {
            Err(err) if err.is_unauthorized() && attempts < MAX_AUTH_ATTEMPTS => {
                attempts += 1;
                warn!("{err} (attempt {attempts} of {MAX_AUTH_ATTEMPTS})");
                credentials = Some(prompt::credentials()?);
            }
            result => return Ok(result?),
        }
    }
}

fn print_settings(cfg: &Config) {
    print::header("settings", false);
    let entries = cfg.entries();
    print::set_key_width(entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0));
    for (key, value) in entries {
        print::aligned_line(key, value);
    }
}

fn print_report(report: &Report) {
    for (idx, section) in report.sections.iter().enumerate() {
        if idx > 0 {
            mprint!();
        }
        print::header(section.kind.title(), false);

        if section.records.is_empty() {
            print::print_status("nothing to report".color(colors::ACCENT).to_string());
            continue;
        }
        for record in &section.records {
            print::record_line(record);
        }
    }
}

fn print_summary(reconciliation: &Reconciliation, total_time: Duration) {
    let radmind_only: ColoredString =
        format!("{} only in Radmind", reconciliation.radmind_only.len()).bold().red();
    let intermapper_only: ColoredString = format!(
        "{} only in InterMapper",
        reconciliation.intermapper_only.len()
    )
    .bold()
    .red();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print::fat_separator();
    if reconciliation.is_consistent() {
        let output = format!("Lists agree: no disparity found in {total_time}")
            .color(colors::TEXT_DEFAULT);
        print::centerln(&output.to_string());
    } else {
        let output = format!("Comparison Complete: {radmind_only}, {intermapper_only} in {total_time}")
            .color(colors::TEXT_DEFAULT);
        print::centerln(&output.to_string());
    }
}
