use std::fmt;

use crate::address::Address;

/// Text shown in place of a hostname that could not be resolved.
pub const NO_ENTRY: &str = "no entry";

/// Outcome of a reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Hostname {
    Resolved(String),
    #[default]
    Unresolved,
}

impl Hostname {
    /// Wraps a name returned by a resolver, keeping only the first label
    /// unless `full_name` is set. Empty names count as unresolved.
    pub fn from_lookup(name: &str, full_name: bool) -> Self {
        let name = name.trim_end_matches('.');
        let kept = if full_name {
            name
        } else {
            name.split('.').next().unwrap_or(name)
        };

        if kept.is_empty() {
            Hostname::Unresolved
        } else {
            Hostname::Resolved(kept.to_string())
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Hostname::Resolved(name) => Some(name),
            Hostname::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Hostname::Resolved(_))
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_deref().unwrap_or(NO_ENTRY))
    }
}

/// One address of a source list together with its hostname.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressRecord {
    pub address: Address,
    pub hostname: Hostname,
}

impl AddressRecord {
    pub fn new(address: Address, hostname: Hostname) -> Self {
        Self { address, hostname }
    }

    pub fn unresolved(address: Address) -> Self {
        Self::new(address, Hostname::Unresolved)
    }
}

impl From<(Address, Hostname)> for AddressRecord {
    fn from((address, hostname): (Address, Hostname)) -> Self {
        Self::new(address, hostname)
    }
}
