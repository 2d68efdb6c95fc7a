use cgmath::Vector3;
use still_life::error::Error;
use still_life::resources::materials::{Material, MaterialRegistry};
use still_life::resources::textures::{MAX_SCENE_TEXTURES, TextureRegistry};

use crate::common::test_utils::{UnitsDouble, call_log, write_gray_image, write_rgb_image};

mod common;

#[test]
fn slots_follow_registration_order() {
    let calls = call_log();
    let mut units = UnitsDouble::new(calls.clone());
    let mut registry = TextureRegistry::new();
    let path = write_rgb_image("slots");

    registry.register(&mut units, &path, "desk_top").unwrap();
    registry.register(&mut units, &path, "plastic").unwrap();
    registry.register(&mut units, &path, "screen").unwrap();

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.resolve_slot("desk_top").unwrap(), 0);
    assert_eq!(registry.resolve_slot("plastic").unwrap(), 1);
    assert_eq!(registry.resolve_slot("screen").unwrap(), 2);
}

#[test]
fn unregistered_tag_is_not_found() {
    let calls = call_log();
    let mut units = UnitsDouble::new(calls);
    let mut registry = TextureRegistry::new();
    let path = write_rgb_image("not-found");
    registry.register(&mut units, &path, "desk_top").unwrap();

    let miss = registry.resolve_slot("keyboard");
    assert!(matches!(miss, Err(Error::UnknownTexture { tag }) if tag == "keyboard"));
}

#[test]
fn registration_beyond_capacity_is_rejected() {
    let calls = call_log();
    let mut units = UnitsDouble::new(calls);
    let mut registry = TextureRegistry::new();
    let path = write_rgb_image("capacity");

    for index in 0..MAX_SCENE_TEXTURES {
        let tag = format!("texture-{index}");
        registry.register(&mut units, &path, &tag).unwrap();
    }
    assert_eq!(registry.len(), MAX_SCENE_TEXTURES);

    let overflow = registry.register(&mut units, &path, "one-too-many");
    assert!(matches!(overflow, Err(Error::RegistryFull { capacity }) if capacity == 16));
    assert_eq!(registry.len(), MAX_SCENE_TEXTURES);
    assert!(matches!(
        registry.resolve_slot("one-too-many"),
        Err(Error::UnknownTexture { .. })
    ));
}

#[test]
fn duplicate_texture_tag_is_rejected() {
    let calls = call_log();
    let mut units = UnitsDouble::new(calls);
    let mut registry = TextureRegistry::new();
    let path = write_rgb_image("duplicate");

    registry.register(&mut units, &path, "desk_top").unwrap();
    let duplicate = registry.register(&mut units, &path, "desk_top");
    assert!(matches!(duplicate, Err(Error::DuplicateTexture { tag }) if tag == "desk_top"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn missing_file_is_a_decode_error() {
    let calls = call_log();
    let mut units = UnitsDouble::new(calls);
    let mut registry = TextureRegistry::new();

    let missing = registry.register(&mut units, "textures/does_not_exist.png", "ghost");
    assert!(matches!(missing, Err(Error::Decode { .. })));
    assert!(registry.is_empty());
}

#[test]
fn single_channel_images_are_unsupported() {
    let calls = call_log();
    let mut units = UnitsDouble::new(calls);
    let mut registry = TextureRegistry::new();
    let path = write_gray_image("gray");

    let unsupported = registry.register(&mut units, &path, "gray");
    assert!(matches!(
        unsupported,
        Err(Error::UnsupportedFormat { channels: 1, .. })
    ));
    assert!(registry.is_empty());
}

#[test]
fn release_all_drops_every_texture() {
    use crate::common::test_utils::Call;

    let calls = call_log();
    let mut units = UnitsDouble::new(calls.clone());
    let mut registry = TextureRegistry::new();
    let path = write_rgb_image("release");

    registry.register(&mut units, &path, "a").unwrap();
    registry.register(&mut units, &path, "b").unwrap();
    registry.release_all(&mut units);

    assert!(registry.is_empty());
    assert!(matches!(
        registry.resolve_slot("a"),
        Err(Error::UnknownTexture { .. })
    ));
    let released: Vec<_> = calls
        .borrow()
        .iter()
        .filter(|call| matches!(call, Call::Release(_)))
        .cloned()
        .collect();
    assert_eq!(released, vec![Call::Release(0), Call::Release(1)]);
}

#[test]
fn undefined_material_is_not_found() {
    let registry = MaterialRegistry::new();
    let miss = registry.resolve("porcelain");
    assert!(matches!(miss, Err(Error::UnknownMaterial { tag }) if tag == "porcelain"));
}

#[test]
fn material_lookup_returns_first_definition() {
    let mut registry = MaterialRegistry::new();
    registry.define(
        "porcelain",
        Material {
            diffuse: Vector3::new(0.8, 0.8, 0.8),
            specular: Vector3::new(0.9, 0.9, 0.9),
            shininess: 5.0,
        },
    );
    registry.define(
        "porcelain",
        Material {
            diffuse: Vector3::new(0.1, 0.1, 0.1),
            specular: Vector3::new(0.2, 0.2, 0.2),
            shininess: 99.0,
        },
    );

    // Duplicate definitions are retained, the first one wins.
    assert_eq!(registry.len(), 2);
    let resolved = registry.resolve("porcelain").unwrap();
    assert_eq!(resolved.diffuse, Vector3::new(0.8, 0.8, 0.8));
    assert_eq!(resolved.specular, Vector3::new(0.9, 0.9, 0.9));
    assert_eq!(resolved.shininess, 5.0);
}
