//! Configuration loading from permcheck.toml.

use host::MemoryHost;
use permissions::{PermissionToken, ProfileOptions};
use serde::Deserialize;
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Permissions the simulated host declares and holds.
    #[serde(default)]
    pub host: HostConfig,

    /// Profile options (`[parsing]`, `[clipboard]`, `[anki.*]`).
    #[serde(flatten)]
    pub options: ProfileOptions,
}

/// Simulated host configuration.
#[derive(Debug, Deserialize)]
pub struct HostConfig {
    /// Always held, cannot be removed.
    #[serde(default)]
    pub required: Vec<PermissionToken>,

    /// May be requested and removed.
    #[serde(default = "default_optional")]
    pub optional: Vec<PermissionToken>,

    /// Optional permissions held at startup.
    #[serde(default)]
    pub granted: Vec<PermissionToken>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            required: Vec::new(),
            optional: default_optional(),
            granted: Vec::new(),
        }
    }
}

fn default_optional() -> Vec<PermissionToken> {
    vec![PermissionToken::CLIPBOARD_READ, PermissionToken::NATIVE_MESSAGING]
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build the in-memory host, holding `extra_grants` on top of the
    /// configured ones.
    pub fn build_host(&self, extra_grants: &[PermissionToken]) -> MemoryHost {
        MemoryHost::builder()
            .required(self.host.required.iter().cloned())
            .optional(self.host.optional.iter().cloned())
            .granted(self.host.granted.iter().chain(extra_grants).cloned())
            .build()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use host::PermissionHost;
    use permissions::Permissions;

    #[test]
    fn test_parse_flattened_options() {
        let toml = r#"
[host]
required = ["storage"]
granted = ["nativeMessaging"]

[parsing]
enableMecabParser = true

[anki.terms.fields]
Picture = "{clipboard-image}"
"#;
        let config = Config::parse(toml).unwrap();

        assert_eq!(config.host.required, vec![PermissionToken::new("storage")]);
        assert_eq!(config.host.optional.len(), 2);
        assert_eq!(config.host.granted, vec![PermissionToken::NATIVE_MESSAGING]);
        assert!(config.options.parsing.enable_mecab_parser);
        assert_eq!(config.options.anki.terms.fields["Picture"], "{clipboard-image}");
    }

    #[test]
    fn test_empty_config_enables_nothing() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.options, ProfileOptions::default());
        assert!(config.host.granted.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[host]\nrequired = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("permcheck.toml");
        std::fs::write(&path, "[clipboard]\nenableBackgroundMonitor = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.options.clipboard.enable_background_monitor);
    }

    #[tokio::test]
    async fn test_build_host_merges_grants() {
        let config = Config::parse("[host]\ngranted = [\"nativeMessaging\"]").unwrap();
        let host = config.build_host(&[PermissionToken::CLIPBOARD_READ]);

        let held = host.get_all().await.unwrap();
        let expected = Permissions::new()
            .with_permission(PermissionToken::NATIVE_MESSAGING)
            .with_permission(PermissionToken::CLIPBOARD_READ);
        assert_eq!(held, expected);
    }
}
