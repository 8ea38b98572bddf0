//! # IPv4 Address Model
//!
//! [`Address`] is the identity key of the whole reconciliation. It wraps an
//! [`Ipv4Addr`], so equality, hashing and ordering all follow the numeric
//! 32-bit value of the address rather than its textual form.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while turning extracted text into addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// An octet is missing its digits or is larger than 255.
    #[error("invalid octet in '{token}': every octet must be between 0 and 255")]
    InvalidOctet { token: String },
    /// A shorthand range whose beginning is larger than its end.
    #[error("malformed range '{token}': {first} is greater than {last}")]
    MalformedRange { token: String, first: u8, last: u8 },
    /// A hyphenated token without the `<first-last>` bracket notation.
    #[error("ambiguous token '{token}': only bracketed ranges are expanded")]
    AmbiguousToken { token: String },
    /// A token that is neither an address nor a shorthand range.
    #[error("unrecognized token '{token}'")]
    Unrecognized { token: String },
}

impl AddressError {
    /// The offending piece of text.
    pub fn token(&self) -> &str {
        match self {
            AddressError::InvalidOctet { token }
            | AddressError::MalformedRange { token, .. }
            | AddressError::AmbiguousToken { token }
            | AddressError::Unrecognized { token } => token,
        }
    }
}

/// A single IPv4 host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(Ipv4Addr);

impl Address {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self(Ipv4Addr::new(a, b, c, d))
    }

    pub fn octets(&self) -> [u8; 4] {
        self.0.octets()
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.0
    }

    pub fn to_u32(&self) -> u32 {
        u32::from(self.0)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self(ip)
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Self(Ipv4Addr::from(octets))
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Self(Ipv4Addr::from(value))
    }
}

impl From<Address> for Ipv4Addr {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parses a dotted quad such as `192.168.1.5`.
    ///
    /// Unlike [`Ipv4Addr::from_str`], octets with leading zeros (`010`) are
    /// accepted, since inventory pages occasionally pad them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(AddressError::Unrecognized {
                token: s.to_string(),
            });
        }

        let mut octets = [0u8; 4];
        for (slot, part) in octets.iter_mut().zip(parts) {
            *slot = parse_octet(part).ok_or_else(|| AddressError::InvalidOctet {
                token: s.to_string(),
            })?;
        }

        Ok(Address::from(octets))
    }
}

/// Parses a run of ASCII digits into an octet, rejecting anything above 255.
pub fn parse_octet(digits: &str) -> Option<u8> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.len() > 3 {
        return None;
    }
    let value: u16 = if trimmed.is_empty() {
        0
    } else {
        trimmed.parse().ok()?
    };
    u8::try_from(value).ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
