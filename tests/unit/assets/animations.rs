use super::*;

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| PathBuf::from("assets").join(n)).collect()
}

#[test]
fn groups_by_tag_in_numeric_frame_order() {
    let anims = SpeciesAnimations::from_paths(
        "cat",
        paths(&[
            "cat_idle-10.png",
            "cat_idle-2.png",
            "cat_idle-0.png",
            "cat_walk-1.png",
            "cat_walk-0.png",
        ]),
    );

    assert_eq!(anims.species(), "cat");
    assert_eq!(anims.tags().collect::<Vec<_>>(), vec!["idle", "walk"]);
    assert_eq!(
        anims.frames("idle").unwrap(),
        paths(&["cat_idle-0.png", "cat_idle-2.png", "cat_idle-10.png"]).as_slice()
    );
    assert_eq!(anims.frame_count("walk"), 2);
    assert_eq!(anims.frame_count("sleep"), 0);
    assert_eq!(anims.total_frames(), 5);
}

#[test]
fn ignores_other_species_and_malformed_names() {
    let anims = SpeciesAnimations::from_paths(
        "cat",
        paths(&["catdog_idle-0.png", "cat_idle.png", "readme.txt"]),
    );
    assert!(anims.is_empty());
    assert_eq!(anims.total_frames(), 0);
}

#[test]
fn first_frame_uses_preference_order() {
    let anims = SpeciesAnimations::from_paths(
        "cat",
        paths(&["cat_walk-0.png", "cat_front-1.png", "cat_front-0.png"]),
    );
    assert_eq!(
        anims.first_frame_of(["idle", "front", "walk"]),
        Some(Path::new("assets/cat_front-0.png"))
    );
    assert_eq!(anims.first_frame_of(["sleep"]), None);
}
