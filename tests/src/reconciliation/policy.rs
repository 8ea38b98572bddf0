use rimdiff_common::AddressError;
use rimdiff_common::config::{Config, SkipPolicy};
use rimdiff_core::diff::DiffService;

use crate::util::{ScriptedResolver, addrs};

const MESSY_CONFIG: &str = "\
10.1.0.<5-2>   reversed.K
10.1.0.7-9     hyphenated.K
10.1.0.400     oversized.K
10.1.0.1       fine.K
";

const MESSY_INVENTORY: &str = "<td>999.10.10.10</td><td>10.1.0.1</td>";

fn service() -> DiffService {
    DiffService::new(Box::new(ScriptedResolver::default()))
}

#[test]
fn skip_policy_keeps_only_valid_entries() {
    let cfg = Config::default();
    let lists = service().collect(MESSY_CONFIG, MESSY_INVENTORY, &cfg).unwrap();

    assert_eq!(lists.radmind, addrs(&["10.1.0.1"]));
    assert_eq!(lists.intermapper, addrs(&["10.1.0.1"]));
}

#[test]
fn reject_policy_stops_at_first_bad_radmind_entry() {
    let cfg = Config {
        policy: SkipPolicy::Reject,
        ..Config::default()
    };
    let err = service().collect(MESSY_CONFIG, "", &cfg).unwrap_err();

    assert_eq!(
        err,
        AddressError::MalformedRange {
            token: "10.1.0.<5-2>".to_string(),
            first: 5,
            last: 2,
        }
    );
}

#[test]
fn reject_policy_applies_to_inventory_octets() {
    let cfg = Config {
        policy: SkipPolicy::Reject,
        ..Config::default()
    };
    let err = service().collect("10.1.0.1\n", MESSY_INVENTORY, &cfg).unwrap_err();

    assert!(matches!(err, AddressError::InvalidOctet { .. }));
    assert_eq!(err.token(), "999.10.10.10");
}

#[test]
fn user_exclusions_are_honoured() {
    let mut cfg = Config::default();
    cfg.exclusions.push("10.1.0.1".parse().unwrap());

    let result = service()
        .run("10.1.0.1\n10.1.0.2\n", "10.1.0.1 10.1.0.3", &cfg)
        .unwrap();

    assert_eq!(result.radmind.addresses().collect::<Vec<_>>(), addrs(&["10.1.0.2"]));
    assert_eq!(result.intermapper.addresses().collect::<Vec<_>>(), addrs(&["10.1.0.3"]));
}
