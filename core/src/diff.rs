//! # Disparity Service
//!
//! Implements the "compare Radmind against InterMapper" use case.
//!
//! The service turns the raw text of both sources into address lists,
//! resolves hostnames for every distinct address, and hands the resulting
//! records to the [`reconcile`](crate::reconcile) module.

use std::collections::BTreeSet;

use rimdiff_common::config::{Config, SkipPolicy};
use rimdiff_common::{Address, AddressError, AddressRecord};
use tracing::{debug, warn};

use crate::expand::expand;
use crate::extract::{RawToken, extract_generic, extract_radmind_lines};
use crate::reconcile::{self, Reconciliation, build_source_list};
use crate::resolver::{self, HostnameResolver, NullResolver, SystemResolver};

/// Raw address lists of both sources, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressLists {
    pub radmind: Vec<Address>,
    pub intermapper: Vec<Address>,
}

impl AddressLists {
    /// Every address that needs a reverse lookup, each one once.
    pub fn distinct(&self) -> BTreeSet<Address> {
        self.radmind
            .iter()
            .chain(&self.intermapper)
            .copied()
            .collect()
    }

    /// Drops every address listed in `exclusions` from both lists.
    pub fn exclude(&mut self, exclusions: &[Address]) {
        if exclusions.is_empty() {
            return;
        }
        let excluded: BTreeSet<Address> = exclusions.iter().copied().collect();
        self.radmind.retain(|addr| !excluded.contains(addr));
        self.intermapper.retain(|addr| !excluded.contains(addr));
    }
}

/// Addresses named at the start of the lines of a Radmind config.
///
/// Shorthand ranges are expanded in place. Bad tokens are handled according
/// to `policy`.
pub fn radmind_addresses(text: &str, policy: SkipPolicy) -> Result<Vec<Address>, AddressError> {
    let mut addresses = Vec::new();
    for token in extract_radmind_lines(text) {
        match expand(&token) {
            Ok(expanded) => addresses.extend(expanded),
            Err(err) => skip_or_reject(err, policy, "Radmind", &token)?,
        }
    }
    Ok(addresses)
}

/// Addresses found anywhere in the InterMapper device list.
pub fn intermapper_addresses(text: &str, policy: SkipPolicy) -> Result<Vec<Address>, AddressError> {
    let mut addresses = Vec::new();
    for candidate in extract_generic(text) {
        match candidate {
            Ok(address) => addresses.push(address),
            Err(err) => match policy {
                SkipPolicy::Skip => warn!("Skipping InterMapper entry: {err}"),
                SkipPolicy::Reject => return Err(err),
            },
        }
    }
    Ok(addresses)
}

fn skip_or_reject(
    err: AddressError,
    policy: SkipPolicy,
    source: &str,
    token: &RawToken<'_>,
) -> Result<(), AddressError> {
    if policy == SkipPolicy::Reject {
        return Err(err);
    }
    match token {
        // hyphenated entries are routinely dropped, no need to shout about it
        RawToken::Ambiguous(_) => debug!("Ignoring {source} entry: {err}"),
        _ => warn!("Skipping {source} entry: {err}"),
    }
    Ok(())
}

/// Orchestrates one comparison run.
pub struct DiffService {
    resolver: Box<dyn HostnameResolver>,
}

impl DiffService {
    pub fn new(resolver: Box<dyn HostnameResolver>) -> Self {
        Self { resolver }
    }

    /// Picks the system resolver, or none at all when `no_dns` is set.
    pub fn for_config(cfg: &Config) -> Self {
        if cfg.no_dns {
            Self::new(Box::new(NullResolver))
        } else {
            Self::new(Box::new(SystemResolver))
        }
    }

    /// Extracts both address lists and removes the configured exclusions.
    pub fn collect(
        &self,
        radmind_text: &str,
        inventory_text: &str,
        cfg: &Config,
    ) -> Result<AddressLists, AddressError> {
        let mut lists = AddressLists {
            radmind: radmind_addresses(radmind_text, cfg.policy)?,
            intermapper: intermapper_addresses(inventory_text, cfg.policy)?,
        };
        lists.exclude(&cfg.exclusions);
        Ok(lists)
    }

    /// Resolves every distinct address once and reconciles the two lists.
    pub fn reconcile(
        &self,
        lists: AddressLists,
        cfg: &Config,
        on_resolved: Option<&(dyn Fn() + Sync)>,
    ) -> Reconciliation {
        let distinct = lists.distinct();
        debug!("Resolving {} distinct addresses", distinct.len());
        let names = resolver::resolve_all(self.resolver.as_ref(), &distinct, cfg.full_names, on_resolved);

        let to_records = |addresses: Vec<Address>| {
            build_source_list(addresses.into_iter().map(|address| {
                let hostname = names.get(&address).cloned().unwrap_or_default();
                AddressRecord::new(address, hostname)
            }))
        };

        reconcile::reconcile(to_records(lists.radmind), to_records(lists.intermapper))
    }

    /// [`collect`](Self::collect) followed by [`reconcile`](Self::reconcile).
    pub fn run(
        &self,
        radmind_text: &str,
        inventory_text: &str,
        cfg: &Config,
    ) -> Result<Reconciliation, AddressError> {
        let lists = self.collect(radmind_text, inventory_text, cfg)?;
        Ok(self.reconcile(lists, cfg, None))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
