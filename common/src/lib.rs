//! Shared data model for `rimdiff`: addresses, shorthand ranges, records and
//! the run configuration.

pub mod address;
pub mod config;
pub mod range;
pub mod record;

pub use address::{Address, AddressError};
pub use range::RangeToken;
pub use record::{AddressRecord, Hostname, NO_ENTRY};
