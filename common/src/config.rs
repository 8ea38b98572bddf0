use std::fmt;
use std::path::PathBuf;

use crate::address::Address;

pub const RADMIND_CONFIG: &str = "/radmind_server_root/radmind/config";
pub const INTERMAPPER_ADDRESS: &str = "https://intermapper.address/~admin/full_screen.html";
pub const INTERMAPPER_DEFAULT: &str = "./intermapper_list.html";

/// Addresses never reported, whichever list they show up in.
pub const BUILTIN_EXCLUSIONS: &[Address] = &[
    Address::new(0, 0, 0, 0),
    Address::new(127, 0, 0, 1),
    Address::new(255, 255, 255, 255),
];

/// Where the InterMapper device list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    File(PathBuf),
    Http(String),
}

impl fmt::Display for InventorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventorySource::File(path) => write!(f, "{}", path.display()),
            InventorySource::Http(url) => f.write_str(url),
        }
    }
}

/// What happens to tokens that cannot become addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipPolicy {
    /// Drop the token, leaving a log line behind.
    #[default]
    Skip,
    /// Abort the run on the first bad token.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Only the addresses missing from the other list.
    #[default]
    Differences,
    /// Every address of both lists.
    Full,
}

/// Which side(s) of the comparison to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultSelection {
    #[default]
    Both,
    Radmind,
    InterMapper,
}

impl ResultSelection {
    pub fn shows_radmind(&self) -> bool {
        matches!(self, ResultSelection::Both | ResultSelection::Radmind)
    }

    pub fn shows_intermapper(&self) -> bool {
        matches!(self, ResultSelection::Both | ResultSelection::InterMapper)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub recipients: Vec<String>,
    pub sender: String,
    pub server: String,
    pub port: u16,
}

/// Settings for one run, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub radmind_file: PathBuf,
    pub inventory: InventorySource,
    /// Keep the complete DNS name instead of its first label.
    pub full_names: bool,
    pub output_mode: OutputMode,
    pub selection: ResultSelection,
    /// Suppresses the console lists. Files and mail are still produced.
    pub quiet: bool,
    /// Prints the effective settings before the run starts.
    pub explicit: bool,
    /// Disables reverse lookups; every hostname is reported as unresolved.
    pub no_dns: bool,
    pub output_file: Option<PathBuf>,
    pub mail: Option<MailConfig>,
    /// Built-in exclusions plus the ones given on the command line.
    pub exclusions: Vec<Address>,
    pub policy: SkipPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radmind_file: PathBuf::from(RADMIND_CONFIG),
            inventory: InventorySource::Http(INTERMAPPER_ADDRESS.to_string()),
            full_names: false,
            output_mode: OutputMode::default(),
            selection: ResultSelection::default(),
            quiet: false,
            explicit: false,
            no_dns: false,
            output_file: None,
            mail: None,
            exclusions: BUILTIN_EXCLUSIONS.to_vec(),
            policy: SkipPolicy::default(),
        }
    }
}

impl Config {
    /// Key/value view of the settings, used by `--explicit`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mail = self
            .mail
            .as_ref()
            .map(|m| format!("{} via {}:{}", m.recipients.join(", "), m.server, m.port))
            .unwrap_or_default();
        let exclusions: Vec<String> = self.exclusions.iter().map(Address::to_string).collect();

        vec![
            ("radmind", self.radmind_file.display().to_string()),
            ("inventory", self.inventory.to_string()),
            ("full", (self.output_mode == OutputMode::Full).to_string()),
            ("names", if self.full_names { "full" } else { "short" }.to_string()),
            ("show", format!("{:?}", self.selection)),
            ("quiet", self.quiet.to_string()),
            ("no_dns", self.no_dns.to_string()),
            ("policy", format!("{:?}", self.policy)),
            (
                "output",
                self.output_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            ("mail", mail),
            ("exclusions", exclusions.join(", ")),
        ]
    }
}
