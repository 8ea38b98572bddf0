use std::fmt;

use rimdiff_common::AddressRecord;
use rimdiff_common::config::{Config, OutputMode};

use crate::reconcile::Reconciliation;

/// Width of the address column in the plain-text rendering.
pub const ADDRESS_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    RadmindList,
    InterMapperList,
    RadmindOnly,
    InterMapperOnly,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::RadmindList => "Radmind Addresses",
            SectionKind::InterMapperList => "InterMapper Addresses",
            SectionKind::RadmindOnly => "In Radmind, not in InterMapper",
            SectionKind::InterMapperOnly => "In InterMapper, not in Radmind",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub records: Vec<AddressRecord>,
}

/// The sections a run should show, picked by output mode and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub mode: OutputMode,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(reconciliation: &Reconciliation, cfg: &Config) -> Self {
        let mut sections = Vec::new();

        let (radmind, intermapper) = match cfg.output_mode {
            OutputMode::Full => (
                Section {
                    kind: SectionKind::RadmindList,
                    records: reconciliation.radmind.records().to_vec(),
                },
                Section {
                    kind: SectionKind::InterMapperList,
                    records: reconciliation.intermapper.records().to_vec(),
                },
            ),
            OutputMode::Differences => (
                Section {
                    kind: SectionKind::RadmindOnly,
                    records: reconciliation.radmind_only.records().to_vec(),
                },
                Section {
                    kind: SectionKind::InterMapperOnly,
                    records: reconciliation.intermapper_only.records().to_vec(),
                },
            ),
        };

        if cfg.selection.shows_radmind() {
            sections.push(radmind);
        }
        if cfg.selection.shows_intermapper() {
            sections.push(intermapper);
        }

        Self {
            mode: cfg.output_mode,
            sections,
        }
    }

    pub fn record_count(&self) -> usize {
        self.sections.iter().map(|s| s.records.len()).sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let title = section.kind.title();
            writeln!(f, "{title} ({})", section.records.len())?;
            writeln!(f, "{}", "-".repeat(title.len()))?;

            if section.records.is_empty() {
                writeln!(f, "  (none)")?;
            }
            for record in &section.records {
                writeln!(
                    f,
                    "  {:<width$} {}",
                    record.address.to_string(),
                    record.hostname,
                    width = ADDRESS_WIDTH
                )?;
            }
        }
        Ok(())
    }
}
