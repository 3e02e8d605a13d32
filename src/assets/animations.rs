use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::assets::name::AssetName;

/// Frames of one species grouped by animation tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpeciesAnimations {
    species: String,
    animations: BTreeMap<String, Vec<PathBuf>>,
}

impl SpeciesAnimations {
    /// Group asset `paths` of `species` by animation tag.
    ///
    /// Frames are ordered by numeric frame index (`idle-2` before `idle-10`). Paths whose file
    /// name does not belong to `species` are ignored.
    pub fn from_paths(species: &str, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut grouped: BTreeMap<String, Vec<(u64, PathBuf)>> = BTreeMap::new();
        for path in paths {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !AssetName::matches_species(name, species) {
                continue;
            }
            let Some(asset) = AssetName::parse(name) else {
                continue;
            };
            grouped
                .entry(asset.animation)
                .or_default()
                .push((asset.frame_index, path));
        }

        let animations = grouped
            .into_iter()
            .map(|(tag, mut frames)| {
                frames.sort();
                (tag, frames.into_iter().map(|(_, p)| p).collect())
            })
            .collect();

        Self {
            species: species.to_string(),
            animations,
        }
    }

    /// Species these animations belong to.
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Animation tags, sorted.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }

    /// Frame paths of `tag` in playback order.
    pub fn frames(&self, tag: &str) -> Option<&[PathBuf]> {
        self.animations.get(tag).map(Vec::as_slice)
    }

    /// Number of frames of `tag` (0 when absent).
    pub fn frame_count(&self, tag: &str) -> usize {
        self.frames(tag).map_or(0, <[PathBuf]>::len)
    }

    /// Number of frames across all tags.
    pub fn total_frames(&self) -> usize {
        self.animations.values().map(Vec::len).sum()
    }

    /// Whether no frames were found.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// First frame of the first animation found among `preferred` tags.
    pub fn first_frame_of<'a>(&self, preferred: impl IntoIterator<Item = &'a str>) -> Option<&Path> {
        preferred
            .into_iter()
            .find_map(|tag| self.frames(tag).and_then(|f| f.first()))
            .map(PathBuf::as_path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/animations.rs"]
mod tests;
