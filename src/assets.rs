//! Embedded default assets
//!
//! The default configuration is compiled into the binary so the CLI works
//! without any files on disk. `init` writes it out for customization.

use rust_embed::RustEmbed;
use std::fs;
use std::io;
use std::path::Path;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.yaml"]
struct EmbeddedAssets;

/// File name of the embedded default configuration.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Result of writing an embedded asset to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Written,
    /// Target already existed and `force` was not set
    Skipped,
}

/// The embedded default configuration as YAML text.
pub fn default_config_yaml() -> io::Result<String> {
    let file = EmbeddedAssets::get(CONFIG_FILE_NAME).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("embedded {CONFIG_FILE_NAME} missing"),
        )
    })?;
    String::from_utf8(file.data.into_owned())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Names of all embedded assets.
pub fn list_embedded() -> Vec<String> {
    let mut names: Vec<String> = EmbeddedAssets::iter().map(|f| f.to_string()).collect();
    names.sort();
    names
}

/// Write the embedded default configuration to `path`.
///
/// Existing files are left alone unless `force` is set. Missing parent
/// directories are created.
pub fn write_default_config(path: &Path, force: bool) -> io::Result<InitOutcome> {
    if path.exists() && !force {
        tracing::debug!(path = %path.display(), "Config exists, skipping");
        return Ok(InitOutcome::Skipped);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, default_config_yaml()?)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(InitOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_embedded() {
        let yaml = default_config_yaml().unwrap();
        assert!(yaml.contains("default_profile"));
        assert!(yaml.contains("profiles:"));
    }

    #[test]
    fn test_list_embedded_contains_config() {
        assert!(list_embedded().contains(&CONFIG_FILE_NAME.to_string()));
    }

    #[test]
    fn test_write_default_config_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/config.yaml");

        let outcome = write_default_config(&path, false).unwrap();

        assert_eq!(outcome, InitOutcome::Written);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            default_config_yaml().unwrap()
        );
    }

    #[test]
    fn test_write_default_config_respects_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "custom: true\n").unwrap();

        assert_eq!(
            write_default_config(&path, false).unwrap(),
            InitOutcome::Skipped
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "custom: true\n");

        assert_eq!(
            write_default_config(&path, true).unwrap(),
            InitOutcome::Written
        );
        assert_ne!(fs::read_to_string(&path).unwrap(), "custom: true\n");
    }
}
