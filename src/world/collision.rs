use crate::{
    foundation::core::{Rect, RectExt},
    world::entity::{Entity, EntityId},
};

/// Contact between an entity and another one during an update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision {
    /// The entity being touched.
    pub other: EntityId,
    /// Overlap of both frames; zero width or height when they only share an edge.
    pub intersection: Rect,
    /// Whether the other entity is ephemeral and cannot carry weight.
    pub is_ephemeral: bool,
}

/// Collisions of `entity` with every other member of `others`.
pub fn collisions_for(entity: &Entity, others: &[Entity]) -> Vec<Collision> {
    others
        .iter()
        .filter(|o| o.id != entity.id && entity.frame.touches(&o.frame))
        .map(|o| Collision {
            other: o.id,
            intersection: entity.frame.intersect(o.frame),
            is_ephemeral: o.is_ephemeral,
        })
        .collect()
}
