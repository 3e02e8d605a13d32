use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::provider::{AssetsProvider, ScanDepth},
    foundation::error::{PetsError, PetsResult},
};

/// Asset root configuration, usually read from a JSON file.
///
/// ```json
/// { "roots": ["PetsAssets", "/usr/share/pets"], "recursive": true }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetsConfig {
    /// Directories searched for species assets, in order.
    pub roots: Vec<PathBuf>,
    /// Also search subdirectories of each root.
    #[serde(default)]
    pub recursive: bool,
}

impl AssetsConfig {
    /// Parse a JSON config. Relative roots stay relative.
    pub fn from_json_str(s: &str) -> PetsResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| PetsError::serde(format!("parse assets config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON config file; relative roots resolve against the file's directory.
    pub fn from_path(path: &Path) -> PetsResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read assets config '{}'", path.display()))?;
        let mut cfg = Self::from_json_str(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        for root in &mut cfg.roots {
            if root.is_relative() {
                *root = base.join(&*root);
            }
        }
        Ok(cfg)
    }

    /// Reject configs without usable roots.
    pub fn validate(&self) -> PetsResult<()> {
        if self.roots.is_empty() {
            return Err(PetsError::validation(
                "assets config must list at least one root",
            ));
        }
        if self.roots.iter().any(|r| r.as_os_str().is_empty()) {
            return Err(PetsError::validation("assets config roots must be non-empty"));
        }
        Ok(())
    }

    /// Scan depth implied by `recursive`.
    pub fn depth(&self) -> ScanDepth {
        if self.recursive {
            ScanDepth::Recursive
        } else {
            ScanDepth::Direct
        }
    }

    /// Build the provider described by this config.
    pub fn to_provider(&self) -> PetsResult<AssetsProvider> {
        self.validate()?;
        AssetsProvider::with_depth(self.roots.iter().cloned(), self.depth())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/config.rs"]
mod tests;
