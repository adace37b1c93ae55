//! Build-time configuration.
//!
//! The data service endpoint, its public key and the deployment base path
//! are baked in when the bundle is built. Native development builds may
//! also pick them up from the process environment or a `.env` file.

use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use jobs_client::JobsClient;

const SUPABASE_URL: &str = "SUPABASE_URL";
const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

static CONFIG: OnceLock<Result<AppConfig, String>> = OnceLock::new();

/// Store the loaded configuration (or the reason it failed). Call once at startup.
pub fn init(config: Result<AppConfig, String>) {
    CONFIG.set(config).ok();
}

pub fn get() -> Result<&'static AppConfig, &'static str> {
    match CONFIG.get() {
        Some(Ok(config)) => Ok(config),
        Some(Err(message)) => Err(message.as_str()),
        None => Err("Configuration was not loaded"),
    }
}

/// Prefix applied to router paths and relative asset URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Normalized to a leading `/` and no trailing `/`; `""` and `"/"` mean no prefix.
    pub fn new(prefix: impl AsRef<str>) -> Self {
        let trimmed = prefix.as_ref().trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// The `[web.app] base_path` the bundle was built with (see `Dioxus.toml`).
    ///
    /// The router reads the same value, so routes and asset URLs share one prefix.
    pub fn from_build_env() -> Self {
        dioxus_cli_config::base_path()
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub base_path: BasePath,
}

impl AppConfig {
    /// Load configuration, failing if the data service is not configured.
    pub fn load() -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let _ = dotenvy::dotenv();

        Self::from_values(
            lookup(option_env!("SUPABASE_URL"), SUPABASE_URL),
            lookup(option_env!("SUPABASE_ANON_KEY"), SUPABASE_ANON_KEY),
            BasePath::from_build_env(),
        )
    }

    pub fn from_values(
        supabase_url: Option<String>,
        supabase_anon_key: Option<String>,
        base_path: BasePath,
    ) -> Result<Self> {
        let supabase_url = required(supabase_url).context("SUPABASE_URL must be set")?;
        let supabase_anon_key =
            required(supabase_anon_key).context("SUPABASE_ANON_KEY must be set")?;

        url::Url::parse(&supabase_url)
            .with_context(|| format!("SUPABASE_URL is not a valid URL: {supabase_url}"))?;

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            base_path,
        })
    }

    pub fn jobs_client(&self) -> JobsClient {
        JobsClient::new(&self.supabase_url, &self.supabase_anon_key)
    }
}

fn lookup(baked: Option<&'static str>, name: &str) -> Option<String> {
    let baked = baked.map(str::to_string);

    #[cfg(not(target_arch = "wasm32"))]
    let baked = baked.or_else(|| std::env::var(name).ok());
    #[cfg(target_arch = "wasm32")]
    let _ = name;

    baked
}

fn required(value: Option<String>) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => bail!("missing or empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_normalization() {
        assert_eq!(BasePath::new("").as_str(), "");
        assert_eq!(BasePath::new("/").as_str(), "");
        assert_eq!(BasePath::new("Daily-Tech-Job-Update").as_str(), "/Daily-Tech-Job-Update");
        assert_eq!(BasePath::new("/Daily-Tech-Job-Update/").as_str(), "/Daily-Tech-Job-Update");
    }

    #[test]
    fn base_path_join() {
        let root = BasePath::default();
        assert_eq!(root.join("/logos/acme.png"), "/logos/acme.png");

        let sub = BasePath::new("Daily-Tech-Job-Update");
        assert_eq!(sub.join("/logos/acme.png"), "/Daily-Tech-Job-Update/logos/acme.png");
    }

    #[test]
    fn dioxus_manifest_declares_deployment_base_path() {
        let manifest = include_str!("../Dioxus.toml");
        let line = manifest
            .lines()
            .find(|line| line.trim_start().starts_with("base_path"))
            .expect("Dioxus.toml sets [web.app] base_path");
        let value = line.split('=').nth(1).unwrap().trim().trim_matches('"');

        assert_eq!(BasePath::new(value).as_str(), "/Daily-Tech-Job-Update");
    }

    #[test]
    fn loads_complete_config() {
        let config = AppConfig::from_values(
            Some("https://abc.supabase.co".into()),
            Some(" anon-key ".into()),
            BasePath::default(),
        )
        .unwrap();

        assert_eq!(config.supabase_anon_key, "anon-key");
        assert_eq!(
            config.jobs_client().jobs_endpoint(),
            "https://abc.supabase.co/rest/v1/jobs"
        );
    }

    #[test]
    fn missing_values_fail_with_variable_name() {
        let err = AppConfig::from_values(None, Some("key".into()), BasePath::default()).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_URL"));

        let err = AppConfig::from_values(
            Some("https://abc.supabase.co".into()),
            Some("   ".into()),
            BasePath::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("SUPABASE_ANON_KEY"));
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = AppConfig::from_values(
            Some("not a url".into()),
            Some("key".into()),
            BasePath::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }
}
