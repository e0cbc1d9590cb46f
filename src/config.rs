use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use log::{info, warn};

use crate::error::{StoreError, StoreResult};

pub const DB_PATH_VAR: &str = "CYBERCAFE_DB_PATH";
pub const SEED_VAR: &str = "CYBERCAFE_SEED";

/// Path value that selects an in-memory SQLite database.
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("cybercafe.db"),
            seed: true,
        }
    }
}

impl StoreConfig {
    pub fn load() -> StoreResult<Self> {
        Ok(Self {
            db_path: try_load(DB_PATH_VAR, "cybercafe.db")?,
            seed: try_load(SEED_VAR, "true")?,
        })
    }

    pub fn in_memory() -> Self {
        Self {
            db_path: PathBuf::from(IN_MEMORY),
            seed: true,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path.as_os_str() == IN_MEMORY
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> StoreResult<T>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            StoreError::Config(format!("invalid {key}: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_file() {
        let config = StoreConfig::default();
        assert!(!config.is_in_memory());
        assert!(config.seed);
    }

    #[test]
    fn test_in_memory_marker() {
        assert!(StoreConfig::in_memory().is_in_memory());
    }

    #[test]
    fn test_try_load_rejects_garbage() {
        let result: StoreResult<bool> = try_load("CYBERCAFE_TEST_UNSET_VAR", "maybe");
        assert!(matches!(result, Err(StoreError::Config(_))));
    }
}
