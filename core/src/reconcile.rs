//! # Reconciliation
//!
//! Orders both address lists numerically and computes what each list has
//! that the other one lacks.

use std::collections::{BTreeMap, HashSet};

use rimdiff_common::{Address, AddressRecord, Hostname};

/// Records of one source, one per address, sorted by numeric address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceList {
    records: Vec<AddressRecord>,
}

impl SourceList {
    pub fn records(&self) -> &[AddressRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressRecord> {
        self.records.iter()
    }

    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.records.iter().map(|record| record.address)
    }

    pub fn contains(&self, address: Address) -> bool {
        self.records
            .binary_search_by_key(&address, |record| record.address)
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<AddressRecord> for SourceList {
    fn from_iter<I: IntoIterator<Item = AddressRecord>>(iter: I) -> Self {
        build_source_list(iter)
    }
}

impl<'a> IntoIterator for &'a SourceList {
    type Item = &'a AddressRecord;
    type IntoIter = std::slice::Iter<'a, AddressRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Records of one list whose address is missing from the other list.
///
/// Keeps the numeric order of the list it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DifferenceSet {
    records: Vec<AddressRecord>,
}

impl DifferenceSet {
    pub fn records(&self) -> &[AddressRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressRecord> {
        self.records.iter()
    }

    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.records.iter().map(|record| record.address)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Both lists of a run and the two differences between them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation {
    pub radmind: SourceList,
    pub intermapper: SourceList,
    /// In Radmind, not in InterMapper.
    pub radmind_only: DifferenceSet,
    /// In InterMapper, not in Radmind.
    pub intermapper_only: DifferenceSet,
}

impl Reconciliation {
    /// Radmind records whose address InterMapper also knows.
    pub fn common(&self) -> impl Iterator<Item = &AddressRecord> + '_ {
        self.radmind
            .iter()
            .filter(|record| self.intermapper.contains(record.address))
    }

    /// True when neither list has anything the other lacks.
    pub fn is_consistent(&self) -> bool {
        self.radmind_only.is_empty() && self.intermapper_only.is_empty()
    }
}

/// Sorts records by address. When an address shows up more than once the
/// last record wins.
pub fn build_source_list<I>(records: I) -> SourceList
where
    I: IntoIterator<Item = AddressRecord>,
{
    let by_address: BTreeMap<Address, Hostname> = records
        .into_iter()
        .map(|record| (record.address, record.hostname))
        .collect();

    SourceList {
        records: by_address.into_iter().map(AddressRecord::from).collect(),
    }
}

/// Records of `positive` whose address does not occur in `negative`.
pub fn difference(positive: &SourceList, negative: &SourceList) -> DifferenceSet {
    let absent: HashSet<Address> = negative.addresses().collect();
    DifferenceSet {
        records: positive
            .iter()
            .filter(|record| !absent.contains(&record.address))
            .cloned()
            .collect(),
    }
}

pub fn reconcile(radmind: SourceList, intermapper: SourceList) -> Reconciliation {
    let radmind_only = difference(&radmind, &intermapper);
    let intermapper_only = difference(&intermapper, &radmind);
    Reconciliation {
        radmind,
        intermapper,
        radmind_only,
        intermapper_only,
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
