use std::f64::consts::PI;

use crate::{
    foundation::core::Vec2,
    world::{capability::Capabilities, entity::Entity},
};

const EPSILON: f64 = 0.0001;

/// Turn the entity along the world edge it is heading into.
///
/// Crawling goes around the screen counter-clockwise: along the top edge to the left, down
/// the left edge, along the bottom to the right and up the right edge.
pub fn update(entity: &mut Entity, caps: &mut Capabilities) {
    if !caps.wall_crawler_enabled() {
        return;
    }

    let bounds = entity.world_bounds;
    let frame = entity.frame;
    let going_up = entity.direction.y < -EPSILON;
    let going_right = entity.direction.x > EPSILON;
    let going_down = entity.direction.y > EPSILON;
    let going_left = entity.direction.x < -EPSILON;

    if going_up && frame.min_y() <= bounds.min_y() {
        entity.direction = Vec2::new(-1.0, 0.0);
        entity.is_upside_down = true;
        entity.set_origin(frame.min_x(), bounds.min_y());
        set_rotation(caps, 0.0, true, true);
    } else if going_right && frame.max_x() >= bounds.max_x() {
        entity.direction = Vec2::new(0.0, -1.0);
        entity.set_origin(bounds.max_x() - frame.width(), frame.min_y());
        set_rotation(caps, PI * 1.5, false, false);
    } else if going_down && frame.max_y() >= bounds.max_y() {
        entity.direction = Vec2::new(1.0, 0.0);
        entity.set_origin(frame.min_x(), bounds.max_y() - frame.height());
        set_rotation(caps, 0.0, false, false);
    } else if going_left && frame.min_x() <= bounds.min_x() {
        entity.direction = Vec2::new(0.0, 1.0);
        entity.is_upside_down = false;
        entity.set_origin(bounds.min_x(), frame.min_y());
        set_rotation(caps, PI * 0.5, false, false);
    }
}

fn set_rotation(caps: &mut Capabilities, z_angle: f64, flip_v: bool, flip_h: bool) {
    let rotation = caps.rotation_mut();
    rotation.is_enabled = true;
    rotation.z_angle = z_angle;
    rotation.is_flipped_vertically = flip_v;
    rotation.is_flipped_horizontally = flip_h;
}

#[cfg(test)]
#[path = "../../tests/unit/world/wall_crawler.rs"]
mod tests;
