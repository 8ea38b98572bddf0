use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::{Message, SmtpTransport, Transport};
use rimdiff_common::config::MailConfig;
use thiserror::Error;
use tracing::debug;

use crate::report::Report;

pub const MAIL_SUBJECT: &str = "Radmind / InterMapper disparity report";

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("could not write results to '{}': {source} (check -o)", .path.display())]
    OutputFile { path: PathBuf, source: io::Error },

    #[error("invalid mail address '{address}': {source}")]
    MailAddress {
        address: String,
        source: lettre::address::AddressError,
    },

    #[error("could not compose mail: {0}")]
    MailMessage(#[from] lettre::error::Error),

    #[error("mail delivery through {server}:{port} failed: {source}")]
    MailDelivery {
        server: String,
        port: u16,
        source: lettre::transport::smtp::Error,
    },
}

/// The report as written to files and mail bodies, stamped with its
/// generation time.
pub fn render_plain(report: &Report, generated: DateTime<Local>) -> String {
    format!(
        "Generated {}\n\n{report}",
        generated.format("%Y-%m-%d %H:%M:%S %Z")
    )
}

pub fn write_report(path: &Path, report: &Report, generated: DateTime<Local>) -> Result<(), SinkError> {
    std::fs::write(path, render_plain(report, generated)).map_err(|source| SinkError::OutputFile {
        path: path.to_path_buf(),
        source,
    })
}

fn mailbox(address: &str) -> Result<Mailbox, SinkError> {
    address.parse().map_err(|source| SinkError::MailAddress {
        address: address.to_string(),
        source,
    })
}

pub fn build_message(mail: &MailConfig, body: String) -> Result<Message, SinkError> {
    let mut builder = Message::builder()
        .from(mailbox(&mail.sender)?)
        .subject(MAIL_SUBJECT)
        .header(ContentType::TEXT_PLAIN);

    for recipient in &mail.recipients {
        builder = builder.to(mailbox(recipient)?);
    }

    Ok(builder.body(body)?)
}

/// Sends the report over plain SMTP to every configured recipient.
pub fn send_mail(mail: &MailConfig, report: &Report, generated: DateTime<Local>) -> Result<(), SinkError> {
    let message = build_message(mail, render_plain(report, generated))?;
    let mailer = SmtpTransport::builder_dangerous(mail.server.as_str())
        .port(mail.port)
        .build();

    debug!("Sending report to {} recipient(s)", mail.recipients.len());
    mailer
        .send(&message)
        .map_err(|source| SinkError::MailDelivery {
            server: mail.server.clone(),
            port: mail.port,
            source,
        })?;
    Ok(())
}
