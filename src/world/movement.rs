use crate::world::{capability::Capabilities, entity::Entity};

/// Advance the entity along its direction for `dt` seconds.
pub fn update(entity: &mut Entity, caps: &Capabilities, dt: f64) {
    if entity.is_static || !caps.movement_enabled() {
        return;
    }
    entity.frame = entity.frame + entity.direction * (entity.speed * dt);
}
