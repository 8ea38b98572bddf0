use std::process::ExitCode;

use rimdiff_common::AddressError;
use rimdiff_core::sink::SinkError;
use rimdiff_core::sources::SourceError;

/// Failure categories, each with its own process exit status so that cron
/// jobs and wrappers can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Other = 1,
    ConfigUnreadable = 3,
    InventoryUnreadable = 4,
    Authentication = 5,
    MailDelivery = 6,
    OutputFile = 7,
    MalformedInput = 8,
}

impl Failure {
    pub fn classify(err: &anyhow::Error) -> Self {
        if let Some(source_err) = err.downcast_ref::<SourceError>() {
            return match source_err {
                SourceError::ConfigUnreadable { .. } => Failure::ConfigUnreadable,
                SourceError::Unauthorized { .. } => Failure::Authentication,
                SourceError::InventoryUnreadable { .. }
                | SourceError::InventoryUnreachable { .. }
                | SourceError::InventoryStatus { .. } => Failure::InventoryUnreadable,
            };
        }
        if let Some(sink_err) = err.downcast_ref::<SinkError>() {
            return match sink_err {
                SinkError::OutputFile { .. } => Failure::OutputFile,
                SinkError::MailAddress { .. }
                | SinkError::MailMessage(_)
                | SinkError::MailDelivery { .. } => Failure::MailDelivery,
            };
        }
        if err.downcast_ref::<AddressError>().is_some() {
            return Failure::MalformedInput;
        }
        Failure::Other
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Failure> for ExitCode {
    fn from(failure: Failure) -> Self {
        ExitCode::from(failure.code())
    }
}
