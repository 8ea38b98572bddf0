use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use reqwest::blocking::Client;
use rimdiff_common::config::InventorySource;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("rimdiff/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read Radmind config '{}': {source} (use -r to choose another file)", .path.display())]
    ConfigUnreadable { path: PathBuf, source: io::Error },

    #[error("could not read InterMapper list '{}': {source} (use -i to choose another file)", .path.display())]
    InventoryUnreadable { path: PathBuf, source: io::Error },

    #[error("could not reach InterMapper at '{url}': {source} (use -I to choose another address or -i for a file)")]
    InventoryUnreachable { url: String, source: reqwest::Error },

    #[error("InterMapper at '{url}' answered with HTTP {status} (use -I to choose another address or -i for a file)")]
    InventoryStatus { url: String, status: StatusCode },

    #[error("InterMapper at '{url}' refused the credentials (HTTP {status}); use -i to read a saved copy instead")]
    Unauthorized { url: String, status: StatusCode },
}

impl SourceError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SourceError::Unauthorized { .. })
    }
}

/// HTTP Basic credentials for the InterMapper web interface.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub fn read_radmind(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| SourceError::ConfigUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_inventory_file(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| SourceError::InventoryUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Downloads the InterMapper device list.
///
/// A 401 or 403 answer comes back as [`SourceError::Unauthorized`] so the
/// caller can ask for credentials and try again.
pub fn fetch_inventory(url: &str, credentials: Option<&Credentials>) -> Result<String, SourceError> {
    let unreachable = |source| SourceError::InventoryUnreachable {
        url: url.to_string(),
        source,
    };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(unreachable)?;

    let mut request = client.get(url);
    if let Some(creds) = credentials {
        request = request.basic_auth(&creds.username, Some(&creds.password));
    }

    debug!("GET {url}");
    let response = request.send().map_err(unreachable)?;
    check_status(url, response.status())?;
    response.text().map_err(unreachable)
}

/// Reads the inventory from whichever source is configured.
pub fn read_inventory(
    source: &InventorySource,
    credentials: Option<&Credentials>,
) -> Result<String, SourceError> {
    match source {
        InventorySource::File(path) => read_inventory_file(path),
        InventorySource::Http(url) => fetch_inventory(url, credentials),
    }
}

fn check_status(url: &str, status: StatusCode) -> Result<(), SourceError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(SourceError::Unauthorized {
            url: url.to_string(),
            status,
        });
    }
    if !status.is_success() {
        return Err(SourceError::InventoryStatus {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://intermapper.example/~admin/full_screen.html";

    #[test]
    fn test_status_mapping() {
        assert!(check_status(URL, StatusCode::OK).is_ok());
        assert!(check_status(URL, StatusCode::UNAUTHORIZED).unwrap_err().is_unauthorized());
        assert!(check_status(URL, StatusCode::FORBIDDEN).unwrap_err().is_unauthorized());
        assert!(matches!(
            check_status(URL, StatusCode::NOT_FOUND),
            Err(SourceError::InventoryStatus { status, .. }) if status == StatusCode::NOT_FOUND
        ));
    }

    #[test]
    fn test_missing_config_mentions_flag() {
        let err = read_radmind(Path::new("/nonexistent/rimdiff/config")).unwrap_err();
        assert!(matches!(err, SourceError::ConfigUnreadable { .. }));
        assert!(err.to_string().contains("-r"));
    }

    #[test]
    fn test_missing_inventory_file() {
        let source = InventorySource::File(PathBuf::from("/nonexistent/rimdiff/list.html"));
        let err = read_inventory(&source, None).unwrap_err();
        assert!(matches!(err, SourceError::InventoryUnreadable { .. }));
        assert!(err.to_string().contains("-i"));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials {
            username: "admin".into(),
            password: "hunter2".into(),
        };
        let shown = format!("{creds:?}");
        assert!(shown.contains("admin"));
        assert!(!shown.contains("hunter2"));
    }
}
