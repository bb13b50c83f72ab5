mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./namesmith.toml", "~/.config/namesmith/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.scan.extensions.is_empty() {
        anyhow::bail!("scan.extensions cannot be empty");
    }

    if config.rename.title_max_chars == 0 {
        anyhow::bail!("rename.title_max_chars cannot be 0");
    }

    if config.rename.fallback_patterns.iter().any(|p| p.is_empty()) {
        anyhow::bail!("rename.fallback_patterns cannot contain empty patterns");
    }

    if let Some(command) = &config.resolver.command {
        match command.first() {
            None => anyhow::bail!("resolver.command cannot be an empty list"),
            Some(program) if which::which(program).is_err() => {
                tracing::warn!("Resolver program not found on PATH: {}", program);
            }
            Some(_) => {}
        }
    }

    if let Some(command) = &config.notifications.command {
        if command.is_empty() {
            anyhow::bail!("notifications.command cannot be an empty list");
        }
    }

    for hook in &config.notifications.webhooks {
        if hook.enabled && hook.url.is_empty() {
            anyhow::bail!("Webhook '{}' is enabled but has no URL", hook.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.scan.extensions.iter().any(|e| e == "mp4"));
        assert_eq!(config.scan.excluded_dirs, vec!["@eaDir"]);
        assert_eq!(config.rename.title_max_chars, 50);
        assert_eq!(config.rename.fallback_patterns, vec!["hhd800.com@"]);
        assert!(config.resolver.command.is_none());
        assert!(!config.resolver.prefer_curated);
        assert!(!config.resolver.include_uncensored);
        assert_eq!(config.timing.lookup_delay_secs, 5);
        assert_eq!(config.timing.startup_delay_secs, 3);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[rename]
noise_keywords = ["[FHD]"]

[timing]
lookup_delay_secs = 0
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.rename.noise_keywords, vec!["[FHD]"]);
        assert_eq!(config.rename.title_max_chars, 50);
        assert_eq!(config.timing.lookup_delay_secs, 0);
        assert_eq!(config.timing.startup_delay_secs, 3);
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[scan]
extensions = ["mp4"]
excluded_dirs = ["done", "@eaDir"]

[resolver]
command = ["sh", "-c", "exit 1", "lookup"]
prefer_curated = true
timeout_secs = 10

[notifications]
command = ["notify-send", "{{title}}", "{{message}}"]
webhooks = [{{ name = "home", url = "http://localhost:9000/hook" }}]
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.scan.extensions, vec!["mp4"]);
        assert_eq!(config.scan.excluded_dirs.len(), 2);
        assert!(config.resolver.prefer_curated);
        assert_eq!(config.resolver.timeout().as_secs(), 10);
        assert_eq!(config.notifications.webhooks.len(), 1);
        assert!(config.notifications.webhooks[0].enabled);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = Config::default();
        config.scan.extensions.clear();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.rename.title_max_chars = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.rename.fallback_patterns.push(String::new());
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.resolver.command = Some(Vec::new());
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.notifications.webhooks.push(WebhookConfig {
            name: "empty".to_string(),
            url: String::new(),
            enabled: true,
        });
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_config(Path::new("/nonexistent/namesmith.toml")).is_err());
    }
}
