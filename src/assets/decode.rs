use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::foundation::error::{PetsError, PetsResult};

/// One decoded sprite frame in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct SpriteFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode encoded image bytes into a [`SpriteFrame`].
pub fn decode_sprite(bytes: &[u8]) -> PetsResult<SpriteFrame> {
    let dyn_img = image::load_from_memory(bytes).context("decode sprite from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(SpriteFrame {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Read and decode the sprite stored at `path`.
pub fn load_sprite(path: &Path) -> PetsResult<SpriteFrame> {
    let bytes = std::fs::read(path)
        .map_err(|e| PetsError::asset(format!("read sprite '{}': {e}", path.display())))?;
    decode_sprite(&bytes)
        .map_err(|e| PetsError::asset(format!("decode sprite '{}': {e}", path.display())))
}

/// Read and decode every path, keeping order.
pub fn load_sprites<P: AsRef<Path>>(paths: &[P]) -> PetsResult<Vec<SpriteFrame>> {
    paths.iter().map(|p| load_sprite(p.as_ref())).collect()
}

/// Frame files of animation `base_name` inside `dir`, probed as `{base_name}-{i}.{ext}`.
///
/// Probing starts at index 0. A missing frame 0 is tolerated so one-based sequences load too;
/// any later gap ends the sequence.
pub fn frame_paths_for(dir: &Path, base_name: &str, ext: &str) -> Vec<PathBuf> {
    let mut frames = Vec::new();
    let mut index = 0u32;
    loop {
        let path = dir.join(format!("{base_name}-{index}.{ext}"));
        if path.is_file() {
            frames.push(path);
        } else if index != 0 {
            break;
        }
        index += 1;
    }
    frames
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
