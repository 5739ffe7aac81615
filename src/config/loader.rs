//! Override file discovery and source layering
//!
//! Priority order (highest to lowest):
//! 1. Command-line overrides (`-D key=value`)
//! 2. Environment variables
//! 3. Override file (.daos-test.toml, $DAOS_TEST_CONFIG or ~/.config/daos-test/config.toml)
//! 4. Built-in defaults

use crate::config::{
    ConfigSource, DefaultConfigProvider, EnvSource, LayeredSource, MapSource, UserConfig,
};
use crate::types::DaosConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an override file
pub const CONFIG_ENV_VAR: &str = "DAOS_TEST_CONFIG";

/// Project-local override file name
pub const PROJECT_CONFIG_FILE: &str = ".daos-test.toml";

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    user_config: Option<UserConfig>,
}

impl ConfigLoader {
    /// Discover an override file in the standard locations
    pub fn new() -> Result<Self, DaosConfigError> {
        let candidates = Self::candidate_paths(
            std::env::current_dir().ok(),
            std::env::var(CONFIG_ENV_VAR).ok(),
            dirs::config_dir(),
        );

        match candidates.into_iter().find(|path| path.exists()) {
            Some(path) => Self::from_path(&path),
            None => {
                debug!("No override file found");
                Ok(Self::default())
            }
        }
    }

    /// Load an explicitly named override file, which must exist
    pub fn from_path(path: &Path) -> Result<Self, DaosConfigError> {
        if !path.exists() {
            return Err(DaosConfigError::MissingConfig(path.to_path_buf()));
        }

        debug!("Loading override file from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| DaosConfigError::ReadFailed(path.to_path_buf(), e))?;

        let user_config: UserConfig = toml::from_str(&content)
            .map_err(|e| DaosConfigError::ParseFailed(path.to_path_buf(), e))?;

        info!(
            "Loaded {} overrides from {}",
            user_config.overrides.len(),
            path.display()
        );

        Ok(Self {
            config_path: Some(path.to_path_buf()),
            user_config: Some(user_config),
        })
    }

    /// Candidate override files in priority order
    fn candidate_paths(
        cwd: Option<PathBuf>,
        env_path: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(cwd) = cwd {
            candidates.push(cwd.join(PROJECT_CONFIG_FILE));
        }

        if let Some(env_path) = env_path.filter(|p| !p.is_empty()) {
            candidates.push(PathBuf::from(env_path));
        }

        if let Some(config_dir) = config_dir {
            candidates.push(config_dir.join("daos-test").join("config.toml"));
        }

        candidates
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn user_config(&self) -> Option<&UserConfig> {
        self.user_config.as_ref()
    }

    /// Stack command-line overrides, the environment and the file, in that order
    pub fn layered(self, cli: MapSource) -> LayeredSource {
        self.layered_over(cli, EnvSource)
    }

    /// Same stacking as [`ConfigLoader::layered`] with `env` in place of the process environment
    pub fn layered_over(self, cli: MapSource, env: impl ConfigSource + 'static) -> LayeredSource {
        let mut layered = LayeredSource::new().push(cli).push(env);
        if let Some(user_config) = self.user_config {
            layered = layered.push(user_config);
        }
        layered
    }

    pub fn into_provider(self, cli: MapSource) -> DefaultConfigProvider<LayeredSource> {
        DefaultConfigProvider::new(self.layered(cli))
    }
}
