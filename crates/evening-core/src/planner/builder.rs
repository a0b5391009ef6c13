//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::Planner;
use crate::{
    catalog::Catalog,
    error::{PlannerError, Result},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    catalog_path: Option<PathBuf>,
    use_config_dir: bool,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            catalog_path: None,
            use_config_dir: true,
        }
    }

    /// Sets a custom catalog file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/evening/catalog.json` when that file exists, and the
    /// built-in catalog otherwise.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Ignores any catalog file in the XDG config directory.
    pub fn builtin_only(mut self) -> Self {
        self.use_config_dir = false;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if an explicit catalog path cannot
    /// be read, `PlannerError::Serialization` or `PlannerError::InvalidInput`
    /// if the catalog file is malformed.
    pub fn build(self) -> Result<Planner> {
        let catalog = match self.catalog_path {
            Some(path) => {
                info!("Using catalog file {}", path.display());
                Catalog::from_path(&path)?
            }
            None => match self.use_config_dir.then(Self::default_catalog_path).flatten() {
                Some(path) => {
                    info!("Using catalog file {}", path.display());
                    Catalog::from_path(&path)?
                }
                None => {
                    debug!("Using built-in catalog");
                    Catalog::builtin()
                }
            },
        };

        Ok(Planner::new(catalog))
    }

    /// Returns the catalog path in the XDG config directory, if present.
    fn default_catalog_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("evening").find_config_file("catalog.json")
    }

    /// Returns where a user catalog file would be placed, creating the
    /// directory if needed.
    pub fn user_catalog_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("evening")
            .place_config_file("catalog.json")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
