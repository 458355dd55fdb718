//! Pass configuration, loaded from the `[desugar]` table of `argfields.toml`.
//!
//! ```toml
//! [desugar]
//! default-visibility = "public"
//! field-order = "prepend"
//! ```

use argfields_ast::Visibility;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for by [`find_config`]
pub const CONFIG_FILE_NAME: &str = "argfields.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Where synthesized fields go relative to hand-written ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOrder {
    /// After the last hand-written field
    #[default]
    Append,
    /// Before the first hand-written field
    Prepend,
}

/// Options controlling the desugaring pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DesugarOptions {
    /// Visibility of an argument field written without `public`/`private`
    pub default_visibility: Visibility,

    /// Placement of synthesized fields in the member list
    pub field_order: FieldOrder,
}

impl Default for DesugarOptions {
    fn default() -> Self {
        Self {
            default_visibility: Visibility::Private,
            field_order: FieldOrder::Append,
        }
    }
}

/// Contents of `argfields.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesugarConfig {
    #[serde(default)]
    pub desugar: DesugarOptions,
}

impl DesugarConfig {
    /// Parse a config from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a config from a string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Walk up from `start` looking for `argfields.toml`
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DesugarOptions::default();
        assert_eq!(options.default_visibility, Visibility::Private);
        assert_eq!(options.field_order, FieldOrder::Append);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DesugarConfig::from_str("").unwrap();
        assert_eq!(config.desugar, DesugarOptions::default());
    }

    #[test]
    fn test_parse_desugar_table() {
        let config = DesugarConfig::from_str(
            r#"
            [desugar]
            default-visibility = "public"
            field-order = "prepend"
            "#,
        )
        .unwrap();
        assert_eq!(config.desugar.default_visibility, Visibility::Public);
        assert_eq!(config.desugar.field_order, FieldOrder::Prepend);
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let config = DesugarConfig::from_str("[desugar]\nfield-order = \"prepend\"\n").unwrap();
        assert_eq!(config.desugar.default_visibility, Visibility::Private);
        assert_eq!(config.desugar.field_order, FieldOrder::Prepend);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = DesugarConfig::from_str("[desugar]\nmangle-params = true\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_bad_visibility_rejected() {
        let result = DesugarConfig::from_str("[desugar]\ndefault-visibility = \"protected\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("src").join("model");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(CONFIG_FILE_NAME), "[desugar]\n").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, root.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[desugar]\ndefault-visibility = \"public\"\n").unwrap();

        let config = DesugarConfig::from_file(&path).unwrap();
        assert_eq!(config.desugar.default_visibility, Visibility::Public);
        assert!(matches!(
            DesugarConfig::from_file(&dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
