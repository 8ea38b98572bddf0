//! # Shorthand Range Model
//!
//! Radmind configs abbreviate runs of hosts in the last octet as
//! `a.b.c.<d-e>`. A [`RangeToken`] is the validated form of that notation.

use crate::address::{Address, AddressError, parse_octet};

/// A validated `a.b.c.<first-last>` range, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeToken {
    prefix: [u8; 3],
    first: u8,
    last: u8,
}

impl RangeToken {
    /// Builds a range, failing with [`AddressError::MalformedRange`] when
    /// `first > last`. `token` is only used for the error message.
    pub fn new(prefix: [u8; 3], first: u8, last: u8, token: &str) -> Result<Self, AddressError> {
        if first > last {
            return Err(AddressError::MalformedRange {
                token: token.to_string(),
                first,
                last,
            });
        }
        Ok(Self {
            prefix,
            first,
            last,
        })
    }

    /// Parses the textual pieces of a shorthand token.
    ///
    /// `prefix` is the `a.b.c` part (a trailing dot is tolerated), `first`
    /// and `last` are the two bounds found inside the angle brackets.
    pub fn parse(prefix: &str, first: &str, last: &str, token: &str) -> Result<Self, AddressError> {
        let invalid = || AddressError::InvalidOctet {
            token: token.to_string(),
        };

        let parts: Vec<&str> = prefix.trim_end_matches('.').split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let mut octets = [0u8; 3];
        for (slot, part) in octets.iter_mut().zip(parts) {
            *slot = parse_octet(part).ok_or_else(invalid)?;
        }

        let first = parse_octet(first).ok_or_else(invalid)?;
        let last = parse_octet(last).ok_or_else(invalid)?;

        Self::new(octets, first, last, token)
    }

    pub fn prefix(&self) -> [u8; 3] {
        self.prefix
    }

    pub fn first(&self) -> Address {
        self.at(self.first)
    }

    pub fn last(&self) -> Address {
        self.at(self.last)
    }

    pub fn len(&self) -> usize {
        usize::from(self.last - self.first) + 1
    }

    /// A valid range always holds at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Yields every address of the range in strictly ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Address> + Clone {
        let prefix = self.prefix;
        (self.first..=self.last).map(move |d| Address::new(prefix[0], prefix[1], prefix[2], d))
    }

    fn at(&self, d: u8) -> Address {
        Address::new(self.prefix[0], self.prefix[1], self.prefix[2], d)
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
