//! # Address Extraction
//!
//! Two grammars pull candidate addresses out of raw text:
//!
//! * [`extract_generic`] scans anywhere in the text for dotted quads. It is
//!   used on the InterMapper device list, which is usually an HTML table.
//! * [`extract_radmind_lines`] looks at the start of every line only, and
//!   understands the `a.b.c.<d-e>` shorthand used by Radmind configs.

use lazy_static::lazy_static;
use regex::Regex;
use rimdiff_common::{Address, AddressError};

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+").expect("Not possible");
    static ref RADMIND_LINE: Regex =
        Regex::new(r"^([0-9]+\.[0-9]+\.[0-9]+\.)([^\s)]+)").expect("Not possible");
    static ref SHORTHAND: Regex = Regex::new(r"^<([0-9]+)-([0-9]+)>$").expect("Not possible");
}

/// A token found at the start of a Radmind config line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'a> {
    /// A plain dotted quad, e.g. `192.168.1.5`.
    Address(&'a str),
    /// A bracketed range, e.g. `192.168.1.<10-12>`.
    Shorthand {
        token: &'a str,
        prefix: &'a str,
        first: &'a str,
        last: &'a str,
    },
    /// Hyphenated without brackets (`192.168.1.10-12`). Never expanded.
    Ambiguous(&'a str),
    /// Anything else that happened to start with three numeric octets.
    Unrecognized(&'a str),
}

impl<'a> RawToken<'a> {
    /// Classifies the full matched token, `prefix` being its `a.b.c.` part.
    fn classify(token: &'a str, prefix: &'a str) -> Self {
        let tail = &token[prefix.len()..];

        if tail.bytes().all(|b| b.is_ascii_digit()) {
            return RawToken::Address(token);
        }

        if let Some(caps) = SHORTHAND.captures(tail) {
            if let (Some(first), Some(last)) = (caps.get(1), caps.get(2)) {
                return RawToken::Shorthand {
                    token,
                    prefix,
                    first: first.as_str(),
                    last: last.as_str(),
                };
            }
        }

        if tail.contains('-') {
            RawToken::Ambiguous(token)
        } else {
            RawToken::Unrecognized(token)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match *self {
            RawToken::Address(token)
            | RawToken::Shorthand { token, .. }
            | RawToken::Ambiguous(token)
            | RawToken::Unrecognized(token) => token,
        }
    }
}

/// Every dotted-quad substring of `text`, left to right, duplicates included.
///
/// Octet values are not checked here.
pub fn dotted_quads(text: &str) -> impl Iterator<Item = &str> + '_ {
    DOTTED_QUAD.find_iter(text).map(|m| m.as_str())
}

/// Scans `text` for dotted quads and validates each one.
///
/// Candidates with an octet above 255 come out as
/// [`AddressError::InvalidOctet`]; what to do with them is up to the caller.
/// Every call starts a fresh scan.
pub fn extract_generic(text: &str) -> impl Iterator<Item = Result<Address, AddressError>> + '_ {
    dotted_quads(text).map(str::parse)
}

/// Takes at most one token per line, anchored at the start of the line.
pub fn extract_radmind_lines(text: &str) -> impl Iterator<Item = RawToken<'_>> + '_ {
    text.lines().filter_map(|line| {
        let caps = RADMIND_LINE.captures(line)?;
        let token = caps.get(0)?.as_str();
        let prefix = caps.get(1)?.as_str();
        Some(RawToken::classify(token, prefix))
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_finds_addresses_in_html() {
        let html = "<td>10.0.0.1</td><td>10.0.0.2</td>";
        let found: Vec<Address> = extract_generic(html).map(Result::unwrap).collect();
        assert_eq!(found, vec![Address::new(10, 0, 0, 1), Address::new(10, 0, 0, 2)]);
    }

    #[test]
    fn test_generic_keeps_duplicates_and_order() {
        let text = "b 10.0.0.9 a 10.0.0.1 again 10.0.0.9";
        let found: Vec<&str> = dotted_quads(text).collect();
        assert_eq!(found, vec!["10.0.0.9", "10.0.0.1", "10.0.0.9"]);
    }

    #[test]
    fn test_generic_is_restartable() {
        let text = "1.1.1.1 2.2.2.2";
        assert_eq!(extract_generic(text).count(), 2);
        assert_eq!(extract_generic(text).count(), 2);
    }

    #[test]
    fn test_generic_has_no_boundaries() {
        let found: Vec<&str> = dotted_quads("v1.2.3.4.5x").collect();
        assert_eq!(found, vec!["1.2.3.4"]);
    }

    #[test]
    fn test_generic_flags_out_of_range_octets() {
        let mut found = extract_generic("999.1.1.1 and 1.1.1.1");
        assert!(matches!(found.next(), Some(Err(AddressError::InvalidOctet { .. }))));
        assert_eq!(found.next(), Some(Ok(Address::new(1, 1, 1, 1))));
        assert_eq!(found.next(), None);
    }

    #[test]
    fn test_radmind_line_classification() {
        let config = "\
192.168.1.5 other-fields
192.168.1.<10-12> trailer
10.0.0.10-12 hyphenated
10.0.0.web something
    172.16.0.1 indented
# 172.16.0.2 commented
(10.1.1.1) parenthesized
10.2.2.2) closing paren
";
        let tokens: Vec<RawToken> = extract_radmind_lines(config).collect();
        assert_eq!(
            tokens,
            vec![
                RawToken::Address("192.168.1.5"),
                RawToken::Shorthand {
                    token: "192.168.1.<10-12>",
                    prefix: "192.168.1.",
                    first: "10",
                    last: "12",
                },
                RawToken::Ambiguous("10.0.0.10-12"),
                RawToken::Unrecognized("10.0.0.web"),
                RawToken::Address("10.2.2.2"),
            ]
        );
    }

    #[test]
    fn test_radmind_only_first_match_per_line() {
        let tokens: Vec<&str> = extract_radmind_lines("10.0.0.1 10.0.0.2 10.0.0.3\n")
            .map(|t| t.as_str())
            .collect();
        assert_eq!(tokens, vec!["10.0.0.1"]);
    }

    #[test]
    fn test_radmind_unclosed_bracket_is_ambiguous() {
        let tokens: Vec<RawToken> = extract_radmind_lines("10.0.0.<1-5 x").collect();
        assert_eq!(tokens, vec![RawToken::Ambiguous("10.0.0.<1-5")]);
    }
}
