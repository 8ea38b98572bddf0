use rimdiff_common::Address;
use rimdiff_common::config::BUILTIN_EXCLUSIONS;

use crate::terminal::print;

/// Lists the addresses that are never reported.
pub fn exclusions(extra: &[Address]) {
    print::header("built-in exclusions", false);
    for address in BUILTIN_EXCLUSIONS {
        print::print_status(address.to_string());
    }

    if !extra.is_empty() {
        print::header("command-line exclusions", false);
        for address in extra {
            print::print_status(address.to_string());
        }
    }
}
