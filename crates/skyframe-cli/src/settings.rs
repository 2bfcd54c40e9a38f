//! Layered configuration: defaults, settings file, environment, flags.
//!
//! Environment variables and flags are both resolved by clap into
//! [`ConnectionArgs`], so the merge here only has to put those on top of
//! whatever the settings file provides.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use skyframe_client::{Session, SessionOptions, SkyframeClient};
use skyframe_core::{Credentials, ServiceUrl};

use crate::cli::ConnectionArgs;

/// Service used when nothing else is configured.
pub const DEFAULT_URL: &str = "http://localhost:8000";

/// Contents of the optional JSON settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    /// Per-request timeout in seconds.
    timeout_secs: Option<u64>,
    /// Assumed token lifetime in seconds.
    token_lifetime_secs: Option<i64>,
}

impl FileSettings {
    fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }
}

/// Fully resolved settings for one invocation.
pub struct Settings {
    pub service: ServiceUrl,
    username: Option<String>,
    password: Option<String>,
    pub options: SessionOptions,
}

impl Settings {
    /// Resolve settings from the command line, reading the settings file if
    /// one is given or present in the default location.
    pub fn resolve(args: &ConnectionArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileSettings::load(path)?,
            None => match default_settings_path() {
                Some(path) if path.exists() => FileSettings::load(&path)?,
                _ => FileSettings::default(),
            },
        };

        Self::merge(args, file)
    }

    fn merge(args: &ConnectionArgs, file: FileSettings) -> Result<Self> {
        let url = args
            .url
            .clone()
            .or(file.url)
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let service = ServiceUrl::new(&url).with_context(|| format!("Invalid service URL: {url}"))?;

        let mut options = SessionOptions::default();
        if let Some(secs) = file.timeout_secs {
            options.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.token_lifetime_secs {
            options.token_lifetime = chrono::Duration::seconds(secs);
        }

        Ok(Self {
            service,
            username: args.username.clone().or(file.username),
            password: args.password.clone().or(file.password),
            options,
        })
    }

    /// Credentials for the login exchange.
    pub fn credentials(&self) -> Result<Credentials> {
        let username = self
            .username
            .as_deref()
            .context("No username configured. Use --username or SKYFRAME_USERNAME.")?;
        let password = self
            .password
            .as_deref()
            .context("No password configured. Use --password or SKYFRAME_PASSWORD.")?;
        Ok(Credentials::new(username, password))
    }

    /// A session against the configured service.
    pub fn session(&self) -> Result<Session> {
        Session::with_options(
            self.service.clone(),
            self.credentials()?,
            self.options.clone(),
        )
        .context("Failed to create session")
    }

    /// A conversion client against the configured service.
    pub fn client(&self) -> Result<SkyframeClient> {
        Ok(SkyframeClient::new(self.session()?))
    }
}

// Custom Debug impl that hides sensitive data
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("service", &self.service)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("options", &self.options)
            .finish()
    }
}

fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "skyframe").map(|dirs| dirs.config_dir().join("config.json"))
}
