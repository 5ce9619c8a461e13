use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use platform_api::{DEFAULT_EMPLOYEES_URL, DEFAULT_TIMEOUT, SourceSettings};
use url::Url;

pub const URL_ENV: &str = "EMPLOYEES_URL";
pub const TIMEOUT_ENV: &str = "EMPLOYEES_TIMEOUT_SECS";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub employees_url: Url,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `load` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = lookup(URL_ENV)
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_EMPLOYEES_URL.to_string());
        let employees_url =
            parse_endpoint(&raw_url).with_context(|| format!("invalid {URL_ENV}"))?;

        let timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => parse_timeout(raw.trim()).with_context(|| format!("invalid {TIMEOUT_ENV}"))?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            employees_url,
            timeout,
        })
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        if let Some(raw) = url {
            self.employees_url = parse_endpoint(raw).context("invalid --url")?;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = timeout_from_secs(secs).context("invalid --timeout-secs")?;
        }
        Ok(self)
    }

    pub fn source_settings(&self) -> SourceSettings {
        SourceSettings::new(self.employees_url.clone()).with_timeout(self.timeout)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("`{raw}` is not a URL"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("unsupported scheme `{other}`, expected http or https")),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .parse()
        .with_context(|| format!("`{raw}` is not a whole number of seconds"))?;
    timeout_from_secs(secs)
}

fn timeout_from_secs(secs: u64) -> Result<Duration> {
    if secs == 0 {
        return Err(anyhow!("timeout must be at least one second"));
    }
    Ok(Duration::from_secs(secs))
}
