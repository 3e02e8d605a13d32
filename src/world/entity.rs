use crate::foundation::core::{Rect, Size, Vec2};

/// Identifier of an entity inside a [`crate::World`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

/// One side of the world bounds, modelled as a thin static entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hotspot {
    /// Strip right above the top edge.
    Top,
    /// Strip right of the right edge.
    Right,
    /// Strip right below the bottom edge (the floor).
    Bottom,
    /// Strip left of the left edge.
    Left,
}

impl Hotspot {
    /// All hotspots, clockwise from the top.
    pub const ALL: [Hotspot; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Thickness of the strip in pixels.
    pub const THICKNESS: f64 = 100.0;

    /// Strip rect for `bounds`, placed just outside the edge.
    pub fn frame(self, bounds: Rect) -> Rect {
        let t = Self::THICKNESS;
        match self {
            Self::Top => Rect::new(bounds.x0, bounds.y0 - t, bounds.x1, bounds.y0),
            Self::Right => Rect::new(bounds.x1, bounds.y0, bounds.x1 + t, bounds.y1),
            Self::Bottom => Rect::new(bounds.x0, bounds.y1, bounds.x1, bounds.y1 + t),
            Self::Left => Rect::new(bounds.x0 - t, bounds.y0, bounds.x0, bounds.y1),
        }
    }
}

/// What an entity represents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// An animated creature of the given species.
    Pet {
        /// Species identifier used for asset lookup.
        species: String,
    },
    /// A world edge.
    Hotspot(Hotspot),
    /// Any other solid object, such as a window the pets can walk on.
    Obstacle,
}

/// Where a one-shot action animation is drawn relative to the entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationPosition {
    /// Anchored at the entity's bottom-left corner, same as the regular sprite.
    #[default]
    FromEntityBottomLeft,
    /// Centered on the entity.
    EntityCenter,
    /// Centered on the world bounds.
    WorldCenter,
}

/// A one-shot animation the entity plays instead of walking.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityAnimation {
    /// Animation tag, e.g. `sleep`.
    pub id: String,
    /// Placement of the animation frames.
    pub position: AnimationPosition,
    /// Frame size override; `None` keeps the entity size.
    pub size: Option<Size>,
}

impl EntityAnimation {
    /// Animation drawn in place of the regular sprite.
    pub fn in_place(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position: AnimationPosition::default(),
            size: None,
        }
    }

    /// Whether the animation repositions or resizes the entity, which suspends gravity.
    pub fn requires_no_gravity(&self) -> bool {
        self.position != AnimationPosition::FromEntityBottomLeft || self.size.is_some()
    }
}

/// High level behavior state of an entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EntityState {
    /// Walking along its direction.
    #[default]
    Move,
    /// Held by the mouse pointer.
    Drag,
    /// Falling towards the ground.
    FreeFall,
    /// Playing a one-shot animation.
    Action {
        /// Animation being played.
        animation: EntityAnimation,
        /// Number of times it should loop.
        loops: u32,
    },
}

/// A body living in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Identifier, unique within its world.
    pub id: EntityId,
    /// What the entity represents.
    pub kind: EntityKind,
    /// Screen-space frame.
    pub frame: Rect,
    /// Unit-ish heading; multiplied by `speed` each second.
    pub direction: Vec2,
    /// Pixels per second along `direction`.
    pub speed: f64,
    /// Current behavior state.
    pub state: EntityState,
    /// Static entities never update.
    pub is_static: bool,
    /// Ephemeral entities collide but never act as ground.
    pub is_ephemeral: bool,
    /// Set while crawling along the top edge.
    pub is_upside_down: bool,
    /// Bounds of the world the entity lives in.
    pub world_bounds: Rect,
}

impl Entity {
    /// New movable entity heading right.
    pub fn new(id: EntityId, kind: EntityKind, frame: Rect, world_bounds: Rect) -> Self {
        Self {
            id,
            kind,
            frame,
            direction: Vec2::new(1.0, 0.0),
            speed: 0.0,
            state: EntityState::Move,
            is_static: false,
            is_ephemeral: false,
            is_upside_down: false,
            world_bounds,
        }
    }

    /// Species of a pet entity.
    pub fn species(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::Pet { species } => Some(species),
            _ => None,
        }
    }

    /// Switch behavior state.
    pub fn set_state(&mut self, state: EntityState) {
        if self.state != state {
            tracing::trace!(id = self.id.0, ?state, "entity state change");
        }
        self.state = state;
    }

    /// Move the frame so its origin is `(x, y)`, keeping its size.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.frame = self.frame.with_origin((x, y));
    }
}
