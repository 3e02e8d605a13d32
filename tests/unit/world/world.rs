use super::*;

// Multiples of 1/8 keep every position exact in f64.
const DT: f64 = 0.125;

fn hotspots(world: &World) -> Vec<(Hotspot, Rect)> {
    world
        .entities()
        .iter()
        .filter_map(|e| match e.kind {
            EntityKind::Hotspot(h) => Some((h, e.frame)),
            _ => None,
        })
        .collect()
}

#[test]
fn new_world_has_static_edge_hotspots() {
    let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
    let world = World::new(bounds);

    let spots = hotspots(&world);
    assert_eq!(spots.len(), 4);
    assert!(world.entities().iter().all(|e| e.is_static));
    let floor = spots.iter().find(|(h, _)| *h == Hotspot::Bottom).unwrap().1;
    assert_eq!(floor.min_y(), 100.0);
    assert_eq!(floor.width(), 200.0);
}

#[test]
fn set_bounds_rebuilds_hotspots_and_propagates() {
    let mut world = World::new(Rect::new(0.0, 0.0, 200.0, 100.0));
    let pet = world.spawn_pet(
        "cat",
        Rect::new(0.0, 0.0, 10.0, 10.0),
        10.0,
        Capabilities::walker(),
    );

    let bigger = Rect::new(0.0, 0.0, 400.0, 300.0);
    world.set_bounds(bigger);

    assert_eq!(world.entities().len(), 5);
    assert_eq!(world.entity(pet).unwrap().world_bounds, bigger);
    let floor = hotspots(&world)
        .into_iter()
        .find(|(h, _)| *h == Hotspot::Bottom)
        .unwrap()
        .1;
    assert_eq!(floor.min_y(), 300.0);
}

#[test]
fn walker_falls_and_lands_on_the_floor() {
    let mut world = World::new(Rect::new(0.0, 0.0, 200.0, 100.0));
    let pet = world.spawn_pet(
        "cat",
        Rect::new(10.0, 0.0, 30.0, 20.0),
        32.0,
        Capabilities::walker(),
    );

    world.update(DT);
    assert_eq!(world.entity(pet).unwrap().state, EntityState::FreeFall);

    for _ in 0..20 {
        world.update(DT);
    }
    let e = world.entity(pet).unwrap();
    assert_eq!(e.state, EntityState::Move);
    assert_eq!(e.frame.max_y(), 100.0);
    assert_eq!(e.direction, Vec2::new(1.0, 0.0));
    assert!(e.frame.min_x() > 14.0);
}

#[test]
fn pet_lands_on_the_update_that_reaches_the_floor() {
    let mut world = World::new(Rect::new(0.0, 0.0, 200.0, 100.0));
    let pet = world.spawn_pet(
        "cat",
        Rect::new(10.0, 0.0, 30.0, 20.0),
        32.0,
        Capabilities::walker(),
    );

    // One update to start falling, then 14 px per update: bottom edge at 90 after six.
    for _ in 0..6 {
        world.update(DT);
    }
    let e = world.entity(pet).unwrap();
    assert_eq!(e.state, EntityState::FreeFall);
    assert_eq!(e.frame.max_y(), 90.0);

    world.update(DT);
    let e = world.entity(pet).unwrap();
    assert_eq!(e.state, EntityState::Move);
    assert_eq!(e.frame.max_y(), 100.0);
}

#[test]
fn crawler_turns_at_the_floor() {
    let mut world = World::new(Rect::new(0.0, 0.0, 200.0, 80.0));
    let pet = world.spawn_pet(
        "spider",
        Rect::new(10.0, 60.0, 20.0, 75.0),
        40.0,
        Capabilities::crawler(),
    );
    world.entity_mut(pet).unwrap().direction = Vec2::new(0.0, 1.0);

    world.update(DT);

    let e = world.entity(pet).unwrap();
    assert_eq!(e.direction, Vec2::new(1.0, 0.0));
    assert_eq!(e.frame, Rect::new(10.0, 65.0, 20.0, 80.0));
    let rotation = world.capabilities(pet).unwrap().rotation.unwrap();
    assert!(rotation.is_enabled);
    assert_eq!(rotation.z_angle, 0.0);
}

#[test]
fn disabling_gravity_stops_a_fall() {
    let mut world = World::new(Rect::new(0.0, 0.0, 200.0, 100.0));
    let pet = world.spawn_pet(
        "cat",
        Rect::new(10.0, 0.0, 30.0, 20.0),
        32.0,
        Capabilities::walker(),
    );
    world.update(DT);

    world.set_gravity(pet, false).unwrap();
    let e = world.entity(pet).unwrap();
    assert_eq!(e.state, EntityState::Move);
    assert_eq!(e.direction, Vec2::new(1.0, 0.0));
    assert!(world.capabilities(pet).unwrap().gravity.is_none());

    world.set_gravity(pet, true).unwrap();
    assert!(world.capabilities(pet).unwrap().gravity_enabled());
}

#[test]
fn unknown_entities_are_reported() {
    let mut world = World::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    let err = world.capabilities_mut(EntityId(999)).unwrap_err();
    assert!(matches!(err, PetsError::Simulation(_)));
    assert!(world.set_gravity(EntityId(999), true).is_err());
}

#[test]
fn kill_removes_entity_and_capabilities() {
    let mut world = World::new(Rect::new(0.0, 0.0, 10.0, 10.0));
    let pet = world.spawn_pet(
        "cat",
        Rect::new(0.0, 0.0, 1.0, 1.0),
        1.0,
        Capabilities::walker(),
    );
    assert!(world.kill(pet));
    assert!(world.entity(pet).is_none());
    assert!(world.capabilities(pet).is_none());
    assert!(!world.kill(pet));
}
