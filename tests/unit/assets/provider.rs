use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pets_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn touch(dir: &Path, names: &[&str]) {
    std::fs::create_dir_all(dir).unwrap();
    for n in names {
        std::fs::write(dir.join(n), b"").unwrap();
    }
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn rejects_empty_root_list() {
    let err = AssetsProvider::new(Vec::<PathBuf>::new()).unwrap_err();
    assert!(matches!(err, PetsError::Validation(_)));
    assert!(PetsAssetsProvider::new([""]).is_err());
}

#[test]
fn direct_scan_skips_subdirectories() {
    let tmp = temp_dir("provider_direct");
    touch(&tmp, &["cat_idle-0.png"]);
    touch(&tmp.join("nested"), &["cat_idle-1.png"]);

    let direct = AssetsProvider::new([&tmp]).unwrap();
    assert_eq!(direct.depth(), ScanDepth::Direct);
    assert_eq!(
        file_names(&direct.all_assets_for_species("cat").unwrap()),
        vec!["cat_idle-0.png"]
    );

    let pets = PetsAssetsProvider::new([&tmp]).unwrap();
    assert_eq!(
        file_names(&pets.all_assets_for_species("cat").unwrap()),
        vec!["cat_idle-0.png", "cat_idle-1.png"]
    );

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn lexicographic_order_and_dedup_across_roots() {
    let tmp = temp_dir("provider_order");
    touch(&tmp, &["cat_idle-10.png", "cat_idle-2.png", "cat_drag-0.png"]);

    let provider = AssetsProvider::new([tmp.clone(), tmp.clone()]).unwrap();
    let found = provider.all_assets_for_species("cat").unwrap();
    assert_eq!(
        file_names(&found),
        vec!["cat_drag-0.png", "cat_idle-10.png", "cat_idle-2.png"]
    );

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_root_is_an_error_not_an_empty_result() {
    let tmp = temp_dir("provider_missing");
    touch(&tmp, &["cat_idle-0.png"]);

    let provider = AssetsProvider::new([tmp.clone(), tmp.join("does-not-exist")]).unwrap();
    let err = provider.all_assets_for_species("cat").unwrap_err();
    assert!(matches!(err, PetsError::Asset(_)));
    assert!(err.to_string().contains("does-not-exist"));

    let file_root = AssetsProvider::new([tmp.join("cat_idle-0.png")]).unwrap();
    assert!(file_root.all_species().is_err());

    std::fs::remove_dir_all(&tmp).ok();
}

#[cfg(unix)]
#[test]
fn broken_entries_below_a_root_are_skipped() {
    let tmp = temp_dir("provider_broken_links");
    touch(&tmp, &["cat_idle-0.png"]);
    touch(&tmp.join("nested"), &["cat_idle-1.png"]);
    std::os::unix::fs::symlink(tmp.join("gone"), tmp.join("stale_link")).unwrap();
    std::os::unix::fs::symlink(&tmp, tmp.join("nested").join("back_to_root")).unwrap();

    let direct = AssetsProvider::new([&tmp]).unwrap();
    assert_eq!(
        file_names(&direct.all_assets_for_species("cat").unwrap()),
        vec!["cat_idle-0.png"]
    );

    let recursive = AssetsProvider::with_depth([&tmp], ScanDepth::Recursive).unwrap();
    assert_eq!(
        file_names(&recursive.all_assets_for_species("cat").unwrap()),
        vec!["cat_idle-0.png", "cat_idle-1.png"]
    );

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn unknown_species_is_empty() {
    let tmp = temp_dir("provider_unknown");
    touch(&tmp, &["cat_idle-0.png"]);

    let provider = AssetsProvider::new([&tmp]).unwrap();
    assert!(provider.all_assets_for_species("dog").unwrap().is_empty());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn lists_species_and_groups_animations() {
    let tmp = temp_dir("provider_species");
    touch(
        &tmp,
        &[
            "cat_idle-0.png",
            "cat_idle-1.png",
            "cat_walk-0.png",
            "big_cat_idle-0.png",
            "notes.txt",
        ],
    );

    let provider = AssetsProvider::new([&tmp]).unwrap();
    assert_eq!(provider.all_species().unwrap(), vec!["big_cat", "cat"]);

    let anims = provider.animations_for_species("cat").unwrap();
    assert_eq!(anims.frame_count("idle"), 2);
    assert_eq!(anims.frame_count("walk"), 1);
    assert_eq!(anims.total_frames(), 3);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn base_dir_layout_points_at_pets_assets() {
    let pets = PetsAssetsProvider::from_base_dir("/opt/pets").unwrap();
    assert_eq!(
        pets.roots(),
        &[PathBuf::from("/opt/pets").join(PetsAssetsProvider::DEFAULT_ASSETS_DIR)]
    );
}
