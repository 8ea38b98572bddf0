pub mod diff;
pub mod exclusions;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use rimdiff_common::Address;
use rimdiff_common::config::{
    BUILTIN_EXCLUSIONS, Config, INTERMAPPER_ADDRESS, INTERMAPPER_DEFAULT, InventorySource,
    MailConfig, OutputMode, RADMIND_CONFIG, ResultSelection, SkipPolicy,
};

#[derive(Parser, Debug)]
#[command(name = "rimdiff")]
#[command(about = "Compares the Radmind config against the InterMapper device list.")]
#[command(version, disable_version_flag = true)]
pub struct CommandLine {
    /// Display the current version and quit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Print every address of both lists, not only the differences
    #[arg(short, long)]
    pub full: bool,

    /// Keep complete DNS names instead of the first label only
    #[arg(short = 'n', long)]
    pub full_names: bool,

    /// Don't print the lists to the console
    #[arg(short, long)]
    pub quiet: bool,

    /// Show all settings at startup
    #[arg(short = 'x', long)]
    pub explicit: bool,

    /// List the built-in exclusions and quit
    #[arg(short = 'E', long = "exclusions")]
    pub list_exclusions: bool,

    /// Never report ADDR, in addition to the built-in exclusions
    #[arg(short = 'e', long = "exclude", value_name = "ADDR")]
    pub exclude: Vec<Address>,

    /// Use FILE as the Radmind config
    #[arg(short = 'r', long = "radmind-file", value_name = "FILE", default_value = RADMIND_CONFIG)]
    pub radmind_file: PathBuf,

    /// Use FILE as the InterMapper device list
    #[arg(short = 'i', long = "intermapper-file", value_name = "FILE")]
    pub intermapper_file: Option<PathBuf>,

    /// Download the InterMapper device list from URL
    #[arg(short = 'I', long = "intermapper-address", value_name = "URL")]
    pub intermapper_address: Option<String>,

    /// Also record the results in FILE
    #[arg(short, long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only show one set of results: 1 = Radmind, 2 = InterMapper
    #[arg(short, long, value_name = "SET", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub show: Option<u8>,

    /// Abort on malformed entries instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Skip reverse DNS lookups
    #[arg(long)]
    pub no_dns: bool,

    /// Mail the results to ADDR
    #[arg(short, long = "mail", value_name = "ADDR")]
    pub mail: Vec<String>,

    #[arg(long, value_name = "HOST", default_value = "localhost")]
    pub smtp_server: String,

    #[arg(long, value_name = "PORT", default_value_t = 25)]
    pub smtp_port: u16,

    #[arg(long, value_name = "ADDR", default_value = "rimdiff@localhost")]
    pub mail_from: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let mut exclusions: Vec<Address> = BUILTIN_EXCLUSIONS.to_vec();
        exclusions.extend(self.exclude.iter().copied());

        let mail = (!self.mail.is_empty()).then(|| MailConfig {
            recipients: self.mail.clone(),
            sender: self.mail_from.clone(),
            server: self.smtp_server.clone(),
            port: self.smtp_port,
        });

        Config {
            radmind_file: self.radmind_file.clone(),
            inventory: self.inventory_source(Path::new(INTERMAPPER_DEFAULT).exists()),
            full_names: self.full_names,
            output_mode: if self.full {
                OutputMode::Full
            } else {
                OutputMode::Differences
            },
            selection: match self.show {
                Some(1) => ResultSelection::Radmind,
                Some(2) => ResultSelection::InterMapper,
                _ => ResultSelection::Both,
            },
            quiet: self.quiet,
            explicit: self.explicit,
            no_dns: self.no_dns,
            output_file: self.output.clone(),
            mail,
            exclusions,
            policy: if self.strict {
                SkipPolicy::Reject
            } else {
                SkipPolicy::Skip
            },
        }
    }

    /// An explicit file wins over an explicit URL. Without either, the
    /// default file is used when present, the default URL otherwise.
    fn inventory_source(&self, default_file_exists: bool) -> InventorySource {
        if let Some(path) = &self.intermapper_file {
            return InventorySource::File(path.clone());
        }
        if let Some(url) = &self.intermapper_address {
            return InventorySource::Http(url.clone());
        }
        if default_file_exists {
            InventorySource::File(PathBuf::from(INTERMAPPER_DEFAULT))
        } else {
            InventorySource::Http(INTERMAPPER_ADDRESS.to_string())
        }
    }
}
