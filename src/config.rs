use std::path::Path;

use crate::error::ConfigError;

/// Game configuration, loadable from TOML. Immutable once a game is built
/// from it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Run length needed to win.
    pub connect: usize,
    pub rows: usize,
    pub columns: usize,
    /// Number of player tokens the driver cycles through.
    pub players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        // Classic Connect Four: two players on a 6x7 board.
        GameConfig {
            connect: 4,
            rows: 6,
            columns: 7,
            players: 2,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values. A `connect` larger than both board
    /// dimensions is accepted; such a game can only end in a draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "connect must be >= 1".into(),
            ));
        }
        if self.rows == 0 {
            return Err(ConfigError::InvalidConfiguration("rows must be >= 1".into()));
        }
        if self.columns == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "columns must be >= 1".into(),
            ));
        }
        if self.players == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "players must be >= 1".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
connect = 5
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.connect, 5);
        // Other fields should be defaults
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
        assert_eq!(config.players, 2);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config.connect, 4);
        assert_eq!(config.players, 2);
    }

    #[test]
    fn test_validation_rejects_zero_connect() {
        let config = GameConfig {
            connect: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let config = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let config = GameConfig {
            columns: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_players() {
        let config = GameConfig {
            players: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_unwinnable_connect() {
        let config = GameConfig {
            connect: 100,
            ..GameConfig::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.rows, 6);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
rows = 8
columns = 9
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.columns, 9);
        // Others are defaults
        assert_eq!(config.connect, 4);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "rows = 0\n").unwrap();
        assert!(GameConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
