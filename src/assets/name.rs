/// Parsed sprite asset file name of the form `{species}_{animation}-{frame_index}.{ext}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetName {
    /// Species identifier (may contain `_`).
    pub species: String,
    /// Animation tag such as `idle`, `walk` or `drag`.
    pub animation: String,
    /// Zero-based frame index within the animation.
    pub frame_index: u64,
    /// File extension without the leading dot.
    pub extension: String,
}

impl AssetName {
    /// Parse a bare file name.
    ///
    /// Animation tags never contain `_`, so the species is everything before the last `_`
    /// of the stem and the frame index follows the last `-`.
    pub fn parse(file_name: &str) -> Option<Self> {
        let (stem, extension) = file_name.rsplit_once('.')?;
        if extension.is_empty() {
            return None;
        }
        let (species, rest) = stem.rsplit_once('_')?;
        if species.is_empty() {
            return None;
        }
        let (animation, frame) = parse_animation_frame(rest)?;
        Some(Self {
            species: species.to_string(),
            animation: animation.to_string(),
            frame_index: frame,
            extension: extension.to_string(),
        })
    }

    /// Whether `file_name` is a sprite asset of exactly `species`.
    ///
    /// The match anchors on `{species}_` followed by a well formed `{tag}-{index}.{ext}`
    /// remainder, so `mushroom` never claims `mushroomwizard_idle-0.png`. The remainder may
    /// not contain another `_`, so it does not claim `mushroom_amanita_idle-0.png` either.
    pub fn matches_species(file_name: &str, species: &str) -> bool {
        if species.is_empty() {
            return false;
        }
        let Some(rest) = file_name
            .strip_prefix(species)
            .and_then(|r| r.strip_prefix('_'))
        else {
            return false;
        };
        let Some((tail, extension)) = rest.rsplit_once('.') else {
            return false;
        };
        !extension.is_empty() && split_animation_frame(tail).is_some()
    }

    /// Canonical file name for this asset.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}-{}.{}",
            self.species, self.animation, self.frame_index, self.extension
        )
    }
}

fn parse_animation_frame(s: &str) -> Option<(&str, u64)> {
    let (animation, frame) = split_animation_frame(s)?;
    Some((animation, frame.parse().ok()?))
}

/// Split `{tag}-{digits}` without bounding the frame number.
fn split_animation_frame(s: &str) -> Option<(&str, &str)> {
    let (animation, frame) = s.rsplit_once('-')?;
    if animation.is_empty() || animation.contains('_') {
        return None;
    }
    if frame.is_empty() || !frame.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((animation, frame))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/name.rs"]
mod tests;
