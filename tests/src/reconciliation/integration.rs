use std::path::PathBuf;
use std::sync::atomic::Ordering;

use rimdiff_common::config::{Config, InventorySource, OutputMode};
use rimdiff_common::{Address, Hostname};
use rimdiff_core::diff::DiffService;
use rimdiff_core::report::Report;
use rimdiff_core::sources;

use crate::util::{ScriptedResolver, TempFile, addrs};

const RADMIND_CONFIG: &str = "\
# lab machines
192.168.1.5     lab/base.K
192.168.1.<10-12>   lab/kiosk.K
192.168.1.20-22 lab/ambiguous.K
10.0.0.1        servers/web.K
127.0.0.1       local.K
";

const INTERMAPPER_HTML: &str = "\
<html><body><table>
<tr><td>kiosk-10</td><td>192.168.1.10</td></tr>
<tr><td>kiosk-11</td><td>192.168.1.11</td></tr>
<tr><td>printer</td><td>192.168.1.200</td></tr>
<tr><td>web</td><td>10.0.0.1</td></tr>
<tr><td>web again</td><td>10.0.0.1</td></tr>
</table></body></html>
";

fn config_for(radmind: &TempFile, inventory: &TempFile) -> Config {
    Config {
        radmind_file: radmind.path.clone(),
        inventory: InventorySource::File(inventory.path.clone()),
        ..Config::default()
    }
}

/// Radmind `192.168.1.5` and `192.168.1.<10-12>` expand to four addresses.
#[test]
fn radmind_config_with_shorthand_range() {
    let config = TempFile::new("scenario1-config", "192.168.1.5 other-fields\n192.168.1.<10-12> trailer\n");
    let inventory = TempFile::new("scenario1-list.html", "");
    let cfg = config_for(&config, &inventory);

    let radmind_text = sources::read_radmind(&cfg.radmind_file).unwrap();
    let inventory_text = sources::read_inventory(&cfg.inventory, None).unwrap();
    let lists = DiffService::new(Box::new(ScriptedResolver::default()))
        .collect(&radmind_text, &inventory_text, &cfg)
        .unwrap();

    assert_eq!(
        lists.radmind,
        addrs(&["192.168.1.5", "192.168.1.10", "192.168.1.11", "192.168.1.12"])
    );
    assert!(lists.intermapper.is_empty());
}

#[test]
fn intermapper_table_cells() {
    let config = TempFile::new("scenario2-config", "");
    let inventory = TempFile::new("scenario2-list.html", "<td>10.0.0.1</td><td>10.0.0.2</td>");
    let cfg = config_for(&config, &inventory);

    let inventory_text = sources::read_inventory(&cfg.inventory, None).unwrap();
    let lists = DiffService::new(Box::new(ScriptedResolver::default()))
        .collect("", &inventory_text, &cfg)
        .unwrap();

    assert_eq!(lists.intermapper, addrs(&["10.0.0.1", "10.0.0.2"]));
}

#[test]
fn differences_in_both_directions() {
    let cfg = Config::default();
    let service = DiffService::new(Box::new(ScriptedResolver::default()));

    let result = service
        .run("10.0.0.1\n10.0.0.2\n", "<td>10.0.0.2</td><td>10.0.0.3</td>", &cfg)
        .unwrap();

    assert_eq!(result.radmind_only.addresses().collect::<Vec<_>>(), addrs(&["10.0.0.1"]));
    assert_eq!(
        result.intermapper_only.addresses().collect::<Vec<_>>(),
        addrs(&["10.0.0.3"])
    );
}

#[test]
fn failed_lookup_renders_as_no_entry() {
    let resolver = ScriptedResolver::with(&[("10.0.0.1", "web.servers.example.edu")]);
    let cfg = Config::default();

    let result = DiffService::new(Box::new(resolver))
        .run("10.0.0.1\n10.0.0.2\n", "", &cfg)
        .unwrap();

    let hostnames: Vec<&Hostname> = result.radmind.iter().map(|r| &r.hostname).collect();
    assert_eq!(
        hostnames,
        vec![&Hostname::Resolved("web".to_string()), &Hostname::Unresolved]
    );

    let text = Report::new(&result, &cfg).to_string();
    assert!(text.contains("10.0.0.1        web\n"));
    assert!(text.contains("10.0.0.2        no entry\n"));
}

#[test]
fn full_run_from_files() {
    let config = TempFile::new("full-config", RADMIND_CONFIG);
    let inventory = TempFile::new("full-list.html", INTERMAPPER_HTML);
    let cfg = Config {
        output_mode: OutputMode::Full,
        full_names: true,
        ..config_for(&config, &inventory)
    };

    let resolver = ScriptedResolver::with(&[
        ("192.168.1.10", "kiosk-10.lab.example.edu"),
        ("10.0.0.1", "web.servers.example.edu"),
    ]);
    let calls = resolver.calls.clone();
    let service = DiffService::new(Box::new(resolver));

    let radmind_text = sources::read_radmind(&cfg.radmind_file).unwrap();
    let inventory_text = sources::read_inventory(&cfg.inventory, None).unwrap();
    let result = service.run(&radmind_text, &inventory_text, &cfg).unwrap();

    // hyphenated entries and the loopback exclusion never make it in
    assert_eq!(
        result.radmind.addresses().collect::<Vec<_>>(),
        addrs(&["10.0.0.1", "192.168.1.5", "192.168.1.10", "192.168.1.11", "192.168.1.12"])
    );
    assert_eq!(
        result.intermapper.addresses().collect::<Vec<_>>(),
        addrs(&["10.0.0.1", "192.168.1.10", "192.168.1.11", "192.168.1.200"])
    );
    assert_eq!(
        result.radmind_only.addresses().collect::<Vec<_>>(),
        addrs(&["192.168.1.5", "192.168.1.12"])
    );
    assert_eq!(
        result.intermapper_only.addresses().collect::<Vec<_>>(),
        addrs(&["192.168.1.200"])
    );

    // one lookup per distinct address across both lists
    assert_eq!(calls.load(Ordering::Relaxed), 6);

    let web = &result.intermapper.records()[0];
    assert_eq!(web.address, Address::new(10, 0, 0, 1));
    assert_eq!(web.hostname, Hostname::Resolved("web.servers.example.edu".to_string()));

    let report = Report::new(&result, &cfg);
    assert_eq!(report.sections.len(), 2);
    assert_eq!(report.record_count(), 9);
}

#[test]
fn missing_radmind_config_is_reported() {
    let err = sources::read_radmind(&PathBuf::from("/nonexistent/radmind/config")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/radmind/config"));
}
