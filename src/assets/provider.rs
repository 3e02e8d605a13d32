use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    assets::animations::SpeciesAnimations,
    assets::name::AssetName,
    foundation::error::{PetsError, PetsResult},
};

/// How deep below each root a provider looks for asset files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanDepth {
    /// Only files placed directly inside a root.
    #[default]
    Direct,
    /// Files anywhere below a root, e.g. per-species subdirectories.
    Recursive,
}

/// Lookup of sprite assets by species identifier.
pub trait SpeciesAssets {
    /// All asset files of `species`, sorted lexicographically by bare file name.
    ///
    /// An unknown species yields an empty list. A root that cannot be listed is an error.
    fn all_assets_for_species(&self, species: &str) -> PetsResult<Vec<PathBuf>>;

    /// Distinct species identifiers present under the roots, sorted.
    fn all_species(&self) -> PetsResult<Vec<String>>;

    /// Assets of `species` grouped by animation tag, frames in numeric order.
    fn animations_for_species(&self, species: &str) -> PetsResult<SpeciesAnimations> {
        let paths = self.all_assets_for_species(species)?;
        Ok(SpeciesAnimations::from_paths(species, paths))
    }
}

/// Finds species assets inside an ordered set of root directories.
///
/// The provider holds no state besides its roots: every query lists the filesystem again.
#[derive(Clone, Debug)]
pub struct AssetsProvider {
    roots: Vec<PathBuf>,
    depth: ScanDepth,
}

impl AssetsProvider {
    /// Provider scanning files placed directly inside each of `roots`.
    ///
    /// Fails when `roots` is empty or contains an empty path.
    pub fn new<I, P>(roots: I) -> PetsResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_depth(roots, ScanDepth::Direct)
    }

    /// Provider with an explicit [`ScanDepth`].
    pub fn with_depth<I, P>(roots: I, depth: ScanDepth) -> PetsResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots: Vec<PathBuf> = roots.into_iter().map(Into::into).collect();
        if roots.is_empty() {
            return Err(PetsError::validation(
                "assets provider needs at least one root directory",
            ));
        }
        if roots.iter().any(|r| r.as_os_str().is_empty()) {
            return Err(PetsError::validation("asset root paths must be non-empty"));
        }
        Ok(Self { roots, depth })
    }

    /// Configured roots, in search order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Configured scan depth.
    pub fn depth(&self) -> ScanDepth {
        self.depth
    }

    /// Every regular file below the roots, paired with its UTF-8 file name.
    ///
    /// Fails when a root itself cannot be listed, so a broken root never produces a partial
    /// result. Broken entries below a root are skipped.
    fn scan_files(&self) -> PetsResult<Vec<(String, PathBuf)>> {
        let max_depth = match self.depth {
            ScanDepth::Direct => 1,
            ScanDepth::Recursive => usize::MAX,
        };

        let mut files = Vec::new();
        for root in &self.roots {
            ensure_dir(root)?;
            for entry in WalkDir::new(root)
                .min_depth(1)
                .max_depth(max_depth)
                .follow_links(true)
            {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) if e.depth() == 0 => {
                        return Err(PetsError::asset(format!(
                            "list asset root '{}': {e}",
                            root.display()
                        )));
                    }
                    Err(e) => {
                        // Dangling links, symlink loops and unreadable subdirectories.
                        tracing::debug!(
                            root = %root.display(),
                            error = %e,
                            "skip broken asset entry"
                        );
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let Some(name) = entry.file_name().to_str() else {
                    tracing::debug!(path = %entry.path().display(), "skip non utf-8 file name");
                    continue;
                };
                files.push((name.to_string(), entry.into_path()));
            }
        }
        Ok(files)
    }
}

impl SpeciesAssets for AssetsProvider {
    #[tracing::instrument(skip(self))]
    fn all_assets_for_species(&self, species: &str) -> PetsResult<Vec<PathBuf>> {
        // Keyed by (file name, path): sorts by bare name and dedupes overlapping roots.
        let found: BTreeSet<(String, PathBuf)> = self
            .scan_files()?
            .into_iter()
            .filter(|(name, _)| AssetName::matches_species(name, species))
            .collect();

        tracing::debug!(count = found.len(), "species assets found");
        Ok(found.into_iter().map(|(_, path)| path).collect())
    }

    #[tracing::instrument(skip(self))]
    fn all_species(&self) -> PetsResult<Vec<String>> {
        let species: BTreeSet<String> = self
            .scan_files()?
            .into_iter()
            .filter_map(|(name, _)| AssetName::parse(&name).map(|a| a.species))
            .collect();
        Ok(species.into_iter().collect())
    }
}

/// [`AssetsProvider`] configured for the pets asset layout.
///
/// Pets assets live under a single top-level directory (see [`Self::DEFAULT_ASSETS_DIR`]),
/// optionally split into per-species subdirectories, so every root is scanned recursively.
#[derive(Clone, Debug)]
pub struct PetsAssetsProvider {
    inner: AssetsProvider,
}

impl PetsAssetsProvider {
    /// Conventional name of the top-level pets assets directory.
    pub const DEFAULT_ASSETS_DIR: &'static str = "PetsAssets";

    /// Provider over `roots`, each scanned recursively.
    pub fn new<I, P>(roots: I) -> PetsResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Ok(Self {
            inner: AssetsProvider::with_depth(roots, ScanDepth::Recursive)?,
        })
    }

    /// Provider over `base/PetsAssets`.
    pub fn from_base_dir(base: impl AsRef<Path>) -> PetsResult<Self> {
        Self::new([base.as_ref().join(Self::DEFAULT_ASSETS_DIR)])
    }

    /// Configured roots, in search order.
    pub fn roots(&self) -> &[PathBuf] {
        self.inner.roots()
    }
}

impl SpeciesAssets for PetsAssetsProvider {
    fn all_assets_for_species(&self, species: &str) -> PetsResult<Vec<PathBuf>> {
        self.inner.all_assets_for_species(species)
    }

    fn all_species(&self) -> PetsResult<Vec<String>> {
        self.inner.all_species()
    }
}

fn ensure_dir(root: &Path) -> PetsResult<()> {
    let meta = std::fs::metadata(root)
        .map_err(|e| PetsError::asset(format!("asset root '{}': {e}", root.display())))?;
    if !meta.is_dir() {
        return Err(PetsError::asset(format!(
            "asset root '{}' is not a directory",
            root.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/provider.rs"]
mod tests;
