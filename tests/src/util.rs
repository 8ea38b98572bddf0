use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rimdiff_common::Address;
use rimdiff_core::resolver::HostnameResolver;

/// Answers reverse lookups from a fixed table and counts the calls.
///
/// `calls` is shared so the count stays readable after the resolver has been
/// boxed into a service.
#[derive(Default)]
pub struct ScriptedResolver {
    names: HashMap<Address, String>,
    pub calls: Arc<AtomicUsize>,
}

impl ScriptedResolver {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            names: entries
                .iter()
                .map(|(addr, name)| (addr.parse().expect("valid test address"), name.to_string()))
                .collect(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl HostnameResolver for ScriptedResolver {
    fn lookup(&self, address: Address) -> Option<String> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.names.get(&address).cloned()
    }
}

/// A file in the temp directory, removed on drop.
pub struct TempFile {
    pub path: PathBuf,
}

impl TempFile {
    pub fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("rimdiff-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("temp file should be writable");
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

pub fn addrs(list: &[&str]) -> Vec<Address> {
    list.iter().map(|a| a.parse().expect("valid test address")).collect()
}
