/// Generator configuration, loaded from a RON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("n-gram order must be at least 1, got {0}")]
    InvalidOrder(usize),
}

/// Settings for a generation run. Missing fields take their defaults.
///
/// ```text
/// (
///     order: 2,
///     seed: Some(42),
///     count: 5,
///     documents: ["green-eggs.txt"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Window length in tokens.
    pub order: usize,
    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Maximum tokens drawn after the start window. `None` means unbounded.
    pub step_limit: Option<usize>,
    /// Sentences to generate.
    pub count: usize,
    /// Documents read before any given on the command line.
    pub documents: Vec<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            order: 3,
            seed: None,
            step_limit: None,
            count: 1,
            documents: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn load_from_ron(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = ron::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order == 0 {
            return Err(ConfigError::InvalidOrder(self.order));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.order, 3);
        assert_eq!(config.count, 1);
        assert!(config.seed.is_none());
        assert!(config.step_limit.is_none());
    }

    #[test]
    fn partial_ron_fills_defaults() {
        let config: GeneratorConfig = ron::from_str("(order: 2, seed: Some(9))").unwrap();
        assert_eq!(config.order, 2);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.count, 1);
        assert!(config.documents.is_empty());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "(order: 2, count: 4, step_limit: Some(50), documents: [\"a.txt\", \"b.txt\"])"
        )
        .unwrap();

        let config = GeneratorConfig::load_from_ron(file.path()).unwrap();
        assert_eq!(config.order, 2);
        assert_eq!(config.count, 4);
        assert_eq!(config.step_limit, Some(50));
        assert_eq!(
            config.documents,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
    }

    #[test]
    fn zero_order_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(order: 0)").unwrap();
        assert!(matches!(
            GeneratorConfig::load_from_ron(file.path()),
            Err(ConfigError::InvalidOrder(0))
        ));
    }

    #[test]
    fn malformed_ron() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(order: \"three\")").unwrap();
        assert!(matches!(
            GeneratorConfig::load_from_ron(file.path()),
            Err(ConfigError::Ron(_))
        ));
    }

    #[test]
    fn ron_round_trip() {
        let config = GeneratorConfig {
            order: 4,
            seed: Some(1),
            step_limit: None,
            count: 2,
            documents: vec![PathBuf::from("x.txt")],
        };
        let text = ron::to_string(&config).unwrap();
        let back: GeneratorConfig = ron::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
