use std::collections::{BTreeSet, HashMap};
use std::net::IpAddr;

use rayon::prelude::*;
use rimdiff_common::{Address, Hostname};
use tracing::{debug, trace};

/// Reverse lookup of a single address.
///
/// Implementors only answer "which name, if any"; the naming policy lives in
/// [`HostnameResolver::resolve`].
pub trait HostnameResolver: Send + Sync {
    /// Returns the name registered for `address`, or `None` on any failure.
    fn lookup(&self, address: Address) -> Option<String>;

    /// Looks `address` up and applies the full/short naming policy.
    fn resolve(&self, address: Address, full_name: bool) -> Hostname {
        match self.lookup(address) {
            Some(name) => Hostname::from_lookup(&name, full_name),
            None => Hostname::Unresolved,
        }
    }
}

/// Uses the platform resolver (`getnameinfo`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl HostnameResolver for SystemResolver {
    fn lookup(&self, address: Address) -> Option<String> {
        let ip = IpAddr::V4(address.ip());
        match dns_lookup::lookup_addr(&ip) {
            // getnameinfo hands the numeric form back when there is no PTR record
            Ok(name) if name.parse::<IpAddr>().ok() == Some(ip) => {
                trace!("no PTR record for {address}");
                None
            }
            Ok(name) => Some(name),
            Err(e) => {
                debug!("reverse lookup of {address} failed: {e}");
                None
            }
        }
    }
}

/// Resolves nothing. Backs `--no-dns`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResolver;

impl HostnameResolver for NullResolver {
    fn lookup(&self, _address: Address) -> Option<String> {
        None
    }
}

/// Resolves every address once, in parallel.
///
/// `on_resolved` is called after each lookup, from whichever worker thread
/// performed it.
pub fn resolve_all(
    resolver: &dyn HostnameResolver,
    addresses: &BTreeSet<Address>,
    full_name: bool,
    on_resolved: Option<&(dyn Fn() + Sync)>,
) -> HashMap<Address, Hostname> {
    addresses
        .par_iter()
        .map(|&address| {
            let hostname = resolver.resolve(address, full_name);
            if let Some(callback) = on_resolved {
                callback();
            }
            (address, hostname)
        })
        .collect()
}
