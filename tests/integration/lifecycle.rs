use nalgebra::Vector3;
use pretty_assertions::assert_eq;
use sar_core::{
    components::{InterceptTarget, ObjectType, SmokeType},
    resources::{SimContext, SimServices},
    systems::{
        create_object, delete_object, do_mortality,
        effects::{explosion_create, smoke_create, SmokeParams},
        objects::delete_all_objects,
        pick_up_human,
    },
};

use crate::common::{
    assert_no_references_to, create_test_helicopter, create_test_scene, create_test_survivor,
};

#[test]
fn test_shared_visual_model_lifetime() {
    let mut scene = create_test_scene();
    let first = scene.visual_models.acquire(Some("foo.obj"), Some("Tank"));
    let second = scene.visual_models.acquire(Some("foo.obj"), Some("Tank"));
    let id = first.id();

    assert_eq!(second.id(), id);
    assert_eq!(scene.visual_models.ref_count(id), Some(2));

    scene.visual_models.release(first);
    assert_eq!(scene.visual_models.ref_count(id), Some(1));
    scene.visual_models.release(second);
    assert_eq!(scene.visual_models.ref_count(id), None);
    assert!(scene.visual_models.is_empty());
}

#[test]
fn test_delete_releases_exclusive_models() {
    let mut scene = create_test_scene();
    let mut services = SimServices::default();
    let ctx = SimContext::new();
    let tank_a = create_object(&mut scene, &ctx, ObjectType::Static).expect("tank");
    let tank_b = create_object(&mut scene, &ctx, ObjectType::Static).expect("tank");

    let shared = scene.visual_models.acquire(Some("tank.obj"), Some("Tank"));
    let shared_again = scene.visual_models.share(&shared);
    let exclusive = scene.visual_models.acquire(Some("tank_ir.obj"), Some("TankIR"));
    let (shared_id, exclusive_id) = (shared.id(), exclusive.id());
    if let Some(object) = scene.object_mut(tank_a) {
        object.visual_models.day = Some(shared);
        object.visual_models.ir = Some(exclusive);
    }
    if let Some(object) = scene.object_mut(tank_b) {
        object.visual_models.day = Some(shared_again);
    }

    assert!(delete_object(&mut scene, &mut services, tank_a));
    assert!(!delete_object(&mut scene, &mut services, tank_a));

    assert!(!scene.visual_models.contains(exclusive_id));
    assert_eq!(scene.visual_models.ref_count(shared_id), Some(1));
}

#[test]
fn test_delete_clears_every_reference() {
    let mut scene = create_test_scene();
    let mut services = SimServices::default();
    let ctx = SimContext::new();
    let (heli, _) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
    let survivor = create_test_survivor(&mut scene, &ctx, 80.0);
    let follower = create_test_survivor(&mut scene, &ctx, 60.0);

    smoke_create(
        &mut scene,
        &ctx,
        SmokeType::Smoke,
        Vector3::zeros(),
        SmokeParams {
            ref_object: Some(heli),
            ..Default::default()
        },
    )
    .expect("smoke");
    explosion_create(&mut scene, &ctx, Vector3::zeros(), 5.0, Some(heli)).expect("explosion");
    if let Some(human) = scene.object_mut(follower).and_then(|o| o.human_mut()) {
        human.intercept_target = InterceptTarget::Object(survivor);
    }
    assert!(pick_up_human(&mut scene, &ctx, heli, survivor));
    scene.player = Some(heli);
    scene.camera.target = Some(survivor);

    assert!(delete_object(&mut scene, &mut services, survivor));
    assert_no_references_to(&scene, survivor);
    assert_eq!(
        scene.object(follower).and_then(|o| o.human()).map(|h| h.intercept_target),
        Some(InterceptTarget::None)
    );

    let fdm = scene.object(heli).and_then(|o| o.fdm()).expect("model");
    assert!(delete_object(&mut scene, &mut services, heli));
    assert_no_references_to(&scene, heli);
    assert!(!scene.fdm.contains(fdm));
}

#[test]
fn test_mortality_and_delete_all() {
    let mut scene = create_test_scene();
    let mut services = SimServices::default();
    let mut ctx = SimContext::new();
    let short = explosion_create(&mut scene, &ctx, Vector3::zeros(), 3.0, None).expect("boom");
    let long = explosion_create(&mut scene, &ctx, Vector3::zeros(), 3.0, None).expect("boom");
    let ground = create_object(&mut scene, &ctx, ObjectType::Ground).expect("ground");
    scene.object_mut(short).expect("live").life_span = 1_000;
    scene.object_mut(long).expect("live").life_span = 5_000;

    ctx.advance(999);
    assert_eq!(do_mortality(&mut scene, &mut services, &ctx), 0);
    ctx.advance(1);
    assert_eq!(do_mortality(&mut scene, &mut services, &ctx), 1);
    assert!(!scene.objects.is_alive(short));
    assert!(scene.objects.is_alive(long));
    assert!(scene.objects.is_alive(ground));
    assert_eq!(scene.ground_objects, vec![ground]);

    delete_all_objects(&mut scene, &mut services);
    assert!(scene.objects.is_empty());
    assert!(scene.ground_objects.is_empty());
}
