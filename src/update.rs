//! Release update check
//!
//! Thin collaborator around the GitHub releases endpoint. Runs off the
//! engine thread; failures are reported as a message and never touch
//! tap-tracking state.

use log::{info, warn};
use semver::Version;
use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::time::Duration;

pub const RELEASE_API_URL: &str =
    "https://api.github.com/repos/taptempors/taptempors/releases/latest";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of an update check, surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    pub available: bool,
    pub message: String,
    pub url: Option<String>,
}

#[derive(Debug)]
pub enum UpdateError {
    /// Request failed or the endpoint answered with a non-success status
    Http(String),
    /// Release payload could not be decoded
    Decode(String),
    /// A version tag could not be parsed
    Version(String),
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::Http(msg) => write!(f, "update check request failed: {}", msg),
            UpdateError::Decode(msg) => write!(f, "invalid release payload: {}", msg),
            UpdateError::Version(msg) => write!(f, "invalid version: {}", msg),
        }
    }
}

impl Error for UpdateError {}

impl From<reqwest::Error> for UpdateError {
    fn from(err: reqwest::Error) -> Self {
        UpdateError::Http(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ReleaseInfo {
    tag_name: String,
    html_url: String,
}

/// Fetch the latest release from `api_url` and compare it against
/// `current`, the running version.
pub fn check_for_update(api_url: &str, current: &str) -> Result<UpdateInfo, UpdateError> {
    info!("Checking for updates, current version {}", current);

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("taptempors/", env!("CARGO_PKG_VERSION")))
        .timeout(HTTP_TIMEOUT)
        .build()?;

    let response = client.get(api_url).send()?;
    if !response.status().is_success() {
        return Err(UpdateError::Http(format!(
            "release endpoint returned {}",
            response.status()
        )));
    }

    let raw = response.text()?;
    let release = parse_release(&raw)?;
    compare_versions(current, &release)
}

/// Open the release page in the platform browser. Failures are logged and
/// swallowed; nothing upstream depends on the outcome.
pub fn open_release_page(url: &str) {
    info!("Opening release page {}", url);
    if let Err(err) = open::that(url) {
        warn!("Failed to open release page {}: {}", url, err);
    }
}

fn parse_release(raw: &str) -> Result<ReleaseInfo, UpdateError> {
    serde_json::from_str(raw).map_err(|err| UpdateError::Decode(err.to_string()))
}

fn compare_versions(current: &str, release: &ReleaseInfo) -> Result<UpdateInfo, UpdateError> {
    let current = Version::parse(normalize_version(current))
        .map_err(|err| UpdateError::Version(format!("current version: {}", err)))?;
    let latest = Version::parse(normalize_version(&release.tag_name))
        .map_err(|err| UpdateError::Version(format!("release tag {}: {}", release.tag_name, err)))?;

    if latest > current {
        info!("Update available: {} -> {}", current, latest);
        Ok(UpdateInfo {
            available: true,
            message: format!("Update available: {}", release.tag_name),
            url: Some(release.html_url.clone()),
        })
    } else {
        info!("Running the latest version {}", current);
        Ok(UpdateInfo {
            available: false,
            message: "You are using the latest version.".to_string(),
            url: None,
        })
    }
}

fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}
