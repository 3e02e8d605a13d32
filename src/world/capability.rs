//! Capability records attached to entities.
//!
//! Capabilities are plain data owned by the [`crate::World`] and looked up by
//! [`crate::EntityId`]. Behavior lives in the per-capability update functions, which receive
//! the entity and its capability set explicitly.

/// Lets the entity travel along its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Movement {
    /// Whether movement is applied on update.
    pub is_enabled: bool,
}

/// Pulls the entity down until it stands on something.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gravity {
    /// Whether gravity is applied on update.
    pub is_enabled: bool,
}

/// Turns the entity along the world edges instead of stopping at them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallCrawler {
    /// Whether crawling is applied on update.
    pub is_enabled: bool,
}

/// Visual rotation of the entity's sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Whether the renderer should apply this rotation.
    pub is_enabled: bool,
    /// Rotation around the screen normal, in radians.
    pub z_angle: f64,
    /// Sprite mirrored top to bottom.
    pub is_flipped_vertically: bool,
    /// Sprite mirrored left to right.
    pub is_flipped_horizontally: bool,
}

impl Movement {
    /// Enabled movement.
    pub const ENABLED: Self = Self { is_enabled: true };
}

impl Gravity {
    /// Enabled gravity.
    pub const ENABLED: Self = Self { is_enabled: true };
}

impl WallCrawler {
    /// Enabled wall crawling.
    pub const ENABLED: Self = Self { is_enabled: true };
}

/// All capabilities installed on one entity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Capabilities {
    /// Installed movement, if any.
    pub movement: Option<Movement>,
    /// Installed gravity, if any.
    pub gravity: Option<Gravity>,
    /// Installed wall crawling, if any.
    pub wall_crawler: Option<WallCrawler>,
    /// Installed rotation, if any.
    pub rotation: Option<Rotation>,
}

impl Capabilities {
    /// Capabilities of a walking pet: movement and gravity.
    pub fn walker() -> Self {
        Self {
            movement: Some(Movement::ENABLED),
            gravity: Some(Gravity::ENABLED),
            ..Self::default()
        }
    }

    /// Capabilities of a pet crawling along the screen edges: movement, crawling, rotation.
    pub fn crawler() -> Self {
        Self {
            movement: Some(Movement::ENABLED),
            wall_crawler: Some(WallCrawler::ENABLED),
            rotation: Some(Rotation::default()),
            ..Self::default()
        }
    }

    /// Enable movement, installing it when missing.
    pub fn enable_movement(&mut self) {
        self.movement = Some(Movement::ENABLED);
    }

    /// Rotation record, installed with defaults when missing.
    pub fn rotation_mut(&mut self) -> &mut Rotation {
        self.rotation.get_or_insert_with(Rotation::default)
    }

    pub(crate) fn movement_enabled(&self) -> bool {
        self.movement.is_some_and(|m| m.is_enabled)
    }

    pub(crate) fn gravity_enabled(&self) -> bool {
        self.gravity.is_some_and(|g| g.is_enabled)
    }

    pub(crate) fn wall_crawler_enabled(&self) -> bool {
        self.wall_crawler.is_some_and(|w| w.is_enabled)
    }
}
