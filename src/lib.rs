//! Engine behind a desktop pets application.
//!
//! A pet is a sprite creature of some *species*. Its frames are plain image files named
//! `{species}_{animation}-{frame}.{ext}` stored under one or more asset roots:
//!
//! 1. **Discover**: [`AssetsProvider`] / [`PetsAssetsProvider`] resolve a species to its
//!    files, grouped per animation by [`SpeciesAnimations`].
//! 2. **Animate**: [`ImageAnimator`] turns a frame sequence and elapsed time into the
//!    frame to show.
//! 3. **Simulate**: [`World`] moves pets around the screen through small capability
//!    records ([`Movement`], [`Gravity`], [`WallCrawler`], [`Rotation`]).
//!
//! Windowing and drawing are left to the embedding GUI; [`typography`] only models label
//! fonts as values.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
/// Asset root configuration.
pub mod config;
mod foundation;
mod ui;
/// Entities, capabilities and the world update loop.
pub mod world;

pub use ui::typography;

pub use animation::animator::{AnimatorEvent, ImageAnimator};
pub use assets::animations::SpeciesAnimations;
pub use assets::decode::{SpriteFrame, decode_sprite, frame_paths_for, load_sprite, load_sprites};
pub use assets::name::AssetName;
pub use assets::provider::{AssetsProvider, PetsAssetsProvider, ScanDepth, SpeciesAssets};
pub use config::AssetsConfig;
pub use foundation::core::{Point, Rect, RectExt, Size, Vec2};
pub use foundation::error::{PetsError, PetsResult};
pub use world::World;
pub use world::capability::{Capabilities, Gravity, Movement, Rotation, WallCrawler};
pub use world::collision::Collision;
pub use world::entity::{
    AnimationPosition, Entity, EntityAnimation, EntityId, EntityKind, EntityState, Hotspot,
};
