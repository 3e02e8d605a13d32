pub mod capability;
/// Contacts between entity frames.
pub mod collision;
/// Entity data and behavior states.
pub mod entity;
/// Falling and landing.
pub mod gravity;
/// Travel along the entity's direction.
pub mod movement;
/// Crawling around the world edges.
pub mod wall_crawler;

use std::collections::HashMap;

use crate::{
    foundation::core::{Rect, Vec2},
    foundation::error::{PetsError, PetsResult},
    world::capability::{Capabilities, Gravity},
    world::collision::collisions_for,
    world::entity::{Entity, EntityId, EntityKind, EntityState, Hotspot},
};

/// The rectangle pets live in, usually the screen, with its entities and their capabilities.
#[derive(Clone, Debug)]
pub struct World {
    bounds: Rect,
    entities: Vec<Entity>,
    capabilities: HashMap<EntityId, Capabilities>,
    next_id: u64,
}

impl World {
    /// Empty world with edge hotspots for `bounds`.
    pub fn new(bounds: Rect) -> Self {
        let mut world = Self {
            bounds,
            entities: Vec::new(),
            capabilities: HashMap::new(),
            next_id: 0,
        };
        world.set_bounds(bounds);
        world
    }

    /// Current bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resize the world: propagates the bounds and rebuilds the edge hotspots.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        for e in &mut self.entities {
            e.world_bounds = bounds;
        }

        let stale: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|e| matches!(e.kind, EntityKind::Hotspot(_)))
            .map(|e| e.id)
            .collect();
        for id in stale {
            self.kill(id);
        }

        for hotspot in Hotspot::ALL {
            let id = self.spawn(EntityKind::Hotspot(hotspot), hotspot.frame(bounds));
            if let Some(e) = self.entity_mut(id) {
                e.is_static = true;
            }
        }
    }

    /// Add an entity with no capabilities.
    pub fn spawn(&mut self, kind: EntityKind, frame: Rect) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity::new(id, kind, frame, self.bounds));
        id
    }

    /// Add a pet of `species` with the given capabilities and walking speed.
    pub fn spawn_pet(
        &mut self,
        species: impl Into<String>,
        frame: Rect,
        speed: f64,
        capabilities: Capabilities,
    ) -> EntityId {
        let id = self.spawn(
            EntityKind::Pet {
                species: species.into(),
            },
            frame,
        );
        if let Some(e) = self.entity_mut(id) {
            e.speed = speed;
        }
        self.capabilities.insert(id, capabilities);
        id
    }

    /// Remove an entity and its capabilities. Returns whether it existed.
    pub fn kill(&mut self, id: EntityId) -> bool {
        self.capabilities.remove(&id);
        let before = self.entities.len();
        self.entities.retain(|e| e.id != id);
        before != self.entities.len()
    }

    /// All entities in spawn order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entity by id.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Mutable entity by id.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Capabilities installed on `id`, if the entity has any.
    pub fn capabilities(&self, id: EntityId) -> Option<&Capabilities> {
        self.capabilities.get(&id)
    }

    /// Capability set of `id`, created empty on first access.
    pub fn capabilities_mut(&mut self, id: EntityId) -> PetsResult<&mut Capabilities> {
        if self.entity(id).is_none() {
            return Err(PetsError::simulation(format!("unknown entity {}", id.0)));
        }
        Ok(self.capabilities.entry(id).or_default())
    }

    /// Install or remove gravity on `id`.
    ///
    /// Removing gravity from a falling entity turns it back into a walker heading right.
    pub fn set_gravity(&mut self, id: EntityId, enabled: bool) -> PetsResult<()> {
        let caps = self.capabilities_mut(id)?;
        if enabled {
            if caps.gravity.is_none() {
                caps.gravity = Some(Gravity::ENABLED);
            }
            return Ok(());
        }

        caps.gravity = None;
        let entity = self
            .entity_mut(id)
            .ok_or_else(|| PetsError::simulation(format!("unknown entity {}", id.0)))?;
        if entity.direction.y > 0.0 {
            entity.direction = Vec2::new(1.0, 0.0);
        }
        entity.set_state(EntityState::Move);
        Ok(())
    }

    /// Advance every non-static entity by `dt` seconds.
    ///
    /// Entities update in spawn order, each seeing the already updated positions of the ones
    /// before it. Collisions are taken after movement.
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn update(&mut self, dt: f64) {
        for i in 0..self.entities.len() {
            if self.entities[i].is_static {
                continue;
            }
            let id = self.entities[i].id;
            let Some(caps) = self.capabilities.get_mut(&id) else {
                continue;
            };

            movement::update(&mut self.entities[i], caps, dt);
            let collisions = collisions_for(&self.entities[i], &self.entities);
            let entity = &mut self.entities[i];
            gravity::update(entity, caps, &collisions);
            wall_crawler::update(entity, caps);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/world/world.rs"]
mod tests;
