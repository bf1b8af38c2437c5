//! Inspector configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DeckforgeError;

/// Controls how a [`DeckInspector`](crate::DeckInspector) builds reports.
///
/// `#[serde(default)]` means a config file only needs the fields it wants
/// to change; everything else comes from [`Default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Whether reports list sideboard entries at all.
    pub include_sideboards: bool,

    /// Name shown for ids the catalog doesn't know.
    pub unknown_card_name: String,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            include_sideboards: true,
            unknown_card_name: "Unknown card".to_string(),
        }
    }
}

impl InspectConfig {
    /// Parses a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, DeckforgeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeckforgeError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InspectConfig::default();
        assert!(config.include_sideboards);
        assert_eq!(config.unknown_card_name, "Unknown card");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            InspectConfig::from_json_str(r#"{"include_sideboards": false}"#)
                .unwrap();
        assert!(!config.include_sideboards);
        assert_eq!(config.unknown_card_name, "Unknown card");
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = InspectConfig::from_json_str("{}").unwrap();
        assert_eq!(config, InspectConfig::default());
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let err = InspectConfig::from_json_str(r#"{"include_sideboards": "yes"}"#)
            .unwrap_err();
        assert!(matches!(err, DeckforgeError::Config(_)));
    }
}
