//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use motor_commerce::catalog::Catalog;
use motor_commerce::Session;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in effect, if any.
    pub config_file: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_file) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_file,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = self.config.catalog.path.as_deref() else {
            self.output.debug("Using built-in catalog");
            return Catalog::seed().context("Built-in catalog is invalid");
        };

        let resolved = self.resolve_path(path);
        self.output
            .debug(&format!("Loading catalog from {}", resolved.display()));

        let content = std::fs::read_to_string(&resolved)
            .with_context(|| format!("Failed to read catalog: {}", resolved.display()))?;

        let catalog = if path.ends_with(".json") {
            Catalog::from_json_str(&content)
        } else {
            Catalog::from_toml_str(&content)
        };

        catalog.with_context(|| format!("Failed to load catalog: {}", resolved.display()))
    }

    /// Start a fresh session over the configured catalog.
    pub fn new_session(&self) -> Result<Session> {
        let catalog = self.load_catalog()?;
        Ok(Session::with_config(catalog, self.config.store.clone()))
    }

    /// Resolve a path relative to the config file's directory, or the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            return path;
        }
        let base = self
            .config_file
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(self.cwd.as_path());
        base.join(path)
    }
}
