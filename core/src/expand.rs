use rimdiff_common::{Address, AddressError, RangeToken};

use crate::extract::RawToken;

/// Turns a Radmind token into the addresses it stands for.
///
/// A concrete token yields one address, a shorthand range yields every
/// address from `first` to `last` in ascending order. Ambiguous and
/// unrecognized tokens are always errors.
pub fn expand(token: &RawToken<'_>) -> Result<Vec<Address>, AddressError> {
    match *token {
        RawToken::Address(text) => Ok(vec![text.parse()?]),
        RawToken::Shorthand {
            token,
            prefix,
            first,
            last,
        } => {
            let range = RangeToken::parse(prefix, first, last, token)?;
            Ok(range.iter().collect())
        }
        RawToken::Ambiguous(token) => Err(AddressError::AmbiguousToken {
            token: token.to_string(),
        }),
        RawToken::Unrecognized(token) => Err(AddressError::Unrecognized {
            token: token.to_string(),
        }),
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
