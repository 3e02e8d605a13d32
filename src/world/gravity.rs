use crate::{
    foundation::core::Vec2,
    world::{
        capability::Capabilities,
        collision::Collision,
        entity::{Entity, EntityState},
    },
};

/// Heading of a falling entity.
pub const FALL_DIRECTION: Vec2 = Vec2::new(0.0, 8.0);

/// Speed of a falling entity.
pub const FALL_SPEED: f64 = 14.0;

/// Apply gravity to `entity` given its current `collisions`.
pub fn update(entity: &mut Entity, caps: &mut Capabilities, collisions: &[Collision]) {
    if !caps.gravity_enabled() {
        return;
    }
    match &entity.state {
        EntityState::Drag => return,
        EntityState::Action { animation, .. } if animation.requires_no_gravity() => return,
        _ => {}
    }

    match ground_level(entity, collisions) {
        Some(level) => on_ground_reached(entity, caps, level),
        None => {
            start_falling_if_needed(entity, caps);
        }
    }
}

/// Top edge of the surface the entity stands on, if any.
///
/// Only non-ephemeral contacts below the entity's top edge count, and among them only the
/// lowest level. That level supports the entity when the contact width on it exceeds half
/// the entity width.
pub fn ground_level(entity: &Entity, collisions: &[Collision]) -> Option<f64> {
    let body = entity.frame;
    let required_contact = body.width() / 2.0;

    let ground: Vec<&Collision> = collisions
        .iter()
        .filter(|c| !c.is_ephemeral)
        .filter(|c| body.min_y() < c.intersection.min_y())
        .collect();

    let level = ground
        .iter()
        .map(|c| c.intersection.min_y())
        .fold(None, |acc: Option<f64>, y| Some(acc.map_or(y, |a| a.max(y))))?;

    let contact: f64 = ground
        .iter()
        .filter(|c| c.intersection.min_y() == level)
        .map(|c| c.intersection.width())
        .sum();

    (contact > required_contact).then_some(level)
}

/// Snap the entity onto `ground_level`; lands it when it was falling.
pub fn on_ground_reached(entity: &mut Entity, caps: &mut Capabilities, ground_level: f64) {
    let target_y = ground_level - entity.frame.height();
    let is_landing = entity.state == EntityState::FreeFall;
    let is_raising = !is_landing && entity.frame.min_y() != target_y;

    if is_landing || is_raising {
        entity.set_origin(entity.frame.min_x(), target_y);
    }
    if is_landing {
        caps.enable_movement();
        entity.set_state(EntityState::Move);
        entity.direction = Vec2::new(1.0, 0.0);
    }
}

/// Put the entity into free fall unless it already is.
///
/// Returns whether the entity started falling.
pub fn start_falling_if_needed(entity: &mut Entity, caps: &mut Capabilities) -> bool {
    if entity.state == EntityState::FreeFall {
        return false;
    }
    caps.enable_movement();
    entity.set_state(EntityState::FreeFall);
    entity.direction = FALL_DIRECTION;
    entity.speed = FALL_SPEED;
    true
}

#[cfg(test)]
#[path = "../../tests/unit/world/gravity.rs"]
mod tests;
