use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub rename: RenameConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Allowed file extensions, without the dot (compared case-insensitively)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names that are never descended into
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    namesmith_common::paths::default_extensions()
}

fn default_excluded_dirs() -> Vec<String> {
    vec!["@eaDir".to_string()]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameConfig {
    /// Literal substrings removed from looked-up titles
    #[serde(default)]
    pub noise_keywords: Vec<String>,

    /// Titles longer than this many characters are cut and get an ellipsis
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,

    /// Literal substrings stripped from the original name when lookup fails
    #[serde(default = "default_fallback_patterns")]
    pub fallback_patterns: Vec<String>,
}

fn default_title_max_chars() -> usize {
    50
}

fn default_fallback_patterns() -> Vec<String> {
    vec!["hhd800.com@".to_string()]
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            noise_keywords: Vec::new(),
            title_max_chars: default_title_max_chars(),
            fallback_patterns: default_fallback_patterns(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Program and leading arguments of the lookup command.
    ///
    /// The identifier is appended, followed by `--curated`/`--uncensored`
    /// when the matching preference is enabled. When unset every lookup fails
    /// and only the local fallback applies.
    #[serde(default)]
    pub command: Option<Vec<String>>,

    #[serde(default)]
    pub prefer_curated: bool,

    #[serde(default)]
    pub include_uncensored: bool,

    /// Per-lookup timeout in seconds (default: 60)
    #[serde(default = "default_resolver_timeout")]
    pub timeout_secs: u64,
}

fn default_resolver_timeout() -> u64 {
    60
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            command: None,
            prefer_curated: false,
            include_uncensored: false,
            timeout_secs: default_resolver_timeout(),
        }
    }
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimingConfig {
    /// Pause after every file that needed a lookup (default: 5)
    #[serde(default = "default_lookup_delay")]
    pub lookup_delay_secs: u64,

    /// One-time pause before an executing run starts (default: 3)
    #[serde(default = "default_startup_delay")]
    pub startup_delay_secs: u64,
}

fn default_lookup_delay() -> u64 {
    5
}

fn default_startup_delay() -> u64 {
    3
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            lookup_delay_secs: default_lookup_delay(),
            startup_delay_secs: default_startup_delay(),
        }
    }
}

impl TimingConfig {
    pub fn lookup_delay(&self) -> Duration {
        Duration::from_secs(self.lookup_delay_secs)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_secs(self.startup_delay_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotificationsConfig {
    /// Desktop notifier invocation; `{title}` and `{message}` are substituted
    #[serde(default)]
    pub command: Option<Vec<String>>,

    #[serde(default)]
    pub webhooks: Vec<WebhookConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    pub name: String,

    pub url: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}
