use nalgebra::Vector3;
use pretty_assertions::assert_eq;
use sar_core::{
    components::{
        AirWorthyState, CameraRef, CenterOffset, Direction, ObjectPart, ObjectType, PartFlags,
        PartType, SmokeType,
    },
    resources::SimContext,
    systems::{
        create_object,
        fdm::{overspeed, parked, touch_down, CrashCause},
        objects::set_slew,
        warp_object,
    },
};

use crate::common::{
    assert_direction_eq, assert_position_eq, count_objects, create_recording_services, create_test_helicopter,
    create_test_scene, MissionCall,
};

#[test]
fn test_gentle_landing_on_land() {
    let mut scene = create_test_scene();
    let (mut services, _sound, mission) = create_recording_services(false);
    let ctx = SimContext::at(10_000);
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
    warp_object(
        &mut scene,
        heli,
        Some(Vector3::new(0.0, 0.0, 100.0)),
        Some(Direction::default()),
    );

    let cause = touch_down(&mut scene, &mut services, &ctx, fdm, 0.5);

    assert_eq!(cause, Some(CrashCause::None));
    assert_eq!(count_objects(&scene, |o| o.explosion().is_some()), 0);
    let aircraft = scene.object(heli).and_then(|o| o.aircraft()).expect("aircraft");
    assert_eq!(aircraft.air_worthy_state, AirWorthyState::Flyable);
    assert!(!aircraft.on_water);
    assert!(mission.calls().is_empty());
}

#[test]
fn test_hard_landing_explodes() {
    let mut scene = create_test_scene();
    let (mut services, sound, mission) = create_recording_services(false);
    let ctx = SimContext::at(10_000);
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::new(0.0, 0.0, 100.0));
    scene.player = Some(heli);

    let cause = touch_down(&mut scene, &mut services, &ctx, fdm, 1.5);

    assert_eq!(cause, Some(CrashCause::Impact));
    let object = scene.object(heli).expect("wreck stays in the scene");
    let aircraft = object.aircraft().expect("aircraft");
    assert_eq!(aircraft.air_worthy_state, AirWorthyState::NotFlyable);
    assert_direction_eq(
        &object.direction,
        &Direction::new(0.0, 0.0, 1.7 * std::f64::consts::PI),
        1e-12,
    );

    let explosions: Vec<f64> = scene
        .objects
        .iter()
        .filter_map(|(_, o)| o.explosion())
        .filter(|e| e.ref_object == Some(heli))
        .map(|e| e.radius)
        .collect();
    assert_eq!(explosions.len(), 1);
    assert!(explosions[0] >= 10.0);
    assert_eq!(count_objects(&scene, |o| o.smoke().is_some()), 1);

    assert!(scene.player_has_crashed);
    assert_eq!(
        scene.banner,
        vec![
            "CRASH".to_string(),
            "*** IMPACTED 150% OF TOLERANCE ***".to_string(),
            "PRESS SPACE TO CONTINUE".to_string(),
        ]
    );
    assert_eq!(scene.camera.reference, CameraRef::Spot);
    assert_eq!(scene.camera.target, Some(heli));
    assert_eq!(sound.filenames(), vec!["crash_ground.wav".to_string()]);
    assert_eq!(mission.calls(), vec![MissionCall::Destroy(heli)]);
}

#[test]
fn test_ditching_splashes() {
    let mut scene = create_test_scene();
    let (mut services, sound, _mission) = create_recording_services(true);
    let ctx = SimContext::new();
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
    let other = create_object(&mut scene, &ctx, ObjectType::Static).expect("bystander");
    scene.player = Some(other);

    let cause = touch_down(&mut scene, &mut services, &ctx, fdm, 0.2);

    assert_eq!(cause, Some(CrashCause::Water));
    let aircraft = scene.object(heli).and_then(|o| o.aircraft()).expect("aircraft");
    assert!(aircraft.on_water);
    assert_eq!(
        count_objects(&scene, |o| o
            .explosion()
            .is_some_and(|e| e.center_offset == CenterOffset::Base)),
        1
    );
    assert_eq!(scene.messages, vec!["*** Rescue 1 has crashed! ***".to_string()]);
    assert!(scene.banner.is_empty());
    assert_eq!(sound.filenames(), vec!["splash_aircraft.wav".to_string()]);
}

#[test]
fn test_belly_landing_sound_from_cockpit() {
    let mut scene = create_test_scene();
    let (mut services, sound, _mission) = create_recording_services(false);
    let ctx = SimContext::new();
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
    if let Some(aircraft) = scene.object_mut(heli).and_then(|o| o.aircraft_mut()) {
        for gear in aircraft.parts.iter_mut() {
            gear.flags = PartFlags::empty();
        }
    }

    assert_eq!(
        touch_down(&mut scene, &mut services, &ctx, fdm, 0.1),
        Some(CrashCause::None)
    );
    assert_eq!(sound.filenames(), vec!["land_ski_inside.wav".to_string()]);

    // Fast enough to scrape the belly, watched from outside
    scene.camera.reference = CameraRef::Spot;
    if let Some(model) = scene.fdm.get_mut(fdm) {
        model.velocity = Vector3::new(5.0, 5.0, -1.0);
    }
    touch_down(&mut scene, &mut services, &ctx, fdm, 0.1);
    assert_eq!(sound.filenames().last().map(String::as_str), Some("land_belly.wav"));
    assert_eq!(
        count_objects(&scene, |o| o.smoke().is_some_and(|s| s.ref_object == Some(heli))),
        1
    );
}

#[test]
fn test_wheel_skid_smokes_each_gear() {
    let mut scene = create_test_scene();
    let (mut services, sound, _mission) = create_recording_services(false);
    let ctx = SimContext::at(2_000);
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::new(5.0, 5.0, 0.0));
    if let Some(aircraft) = scene.object_mut(heli).and_then(|o| o.aircraft_mut()) {
        aircraft.parts.add(
            ObjectPart::new(PartType::LandingGear)
                .with_flags(PartFlags::STATE | PartFlags::GEAR_FIXED)
                .with_positions(Vector3::zeros(), Vector3::zeros(), Vector3::new(-1.0, 0.0, -1.5)),
        );
    }
    scene.camera.reference = CameraRef::Spot;
    if let Some(model) = scene.fdm.get_mut(fdm) {
        model.velocity = Vector3::new(15.0, 15.0, 0.0);
    }

    assert_eq!(
        touch_down(&mut scene, &mut services, &ctx, fdm, 0.1),
        Some(CrashCause::None)
    );

    let heli_position = scene.object(heli).expect("heli").position;
    let mut offsets: Vec<Vector3<f64>> = scene
        .objects
        .iter()
        .filter_map(|(_, o)| o.smoke().map(|smoke| (o, smoke)))
        .map(|(object, smoke)| {
            assert_eq!(smoke.smoke_type, SmokeType::Smoke);
            assert_eq!(smoke.ref_object, None);
            assert_eq!(smoke.texture.as_deref(), Some("sar_smoke_light"));
            assert_eq!(object.life_span, 5_500);
            assert_position_eq(&object.position, &heli_position, 1e-12);
            smoke.respawn_offset
        })
        .collect();
    offsets.sort_by(|a, b| a.x.total_cmp(&b.x));
    assert_eq!(
        offsets,
        vec![Vector3::new(-1.0, 0.0, -1.5), Vector3::new(1.0, 0.0, -1.5)]
    );
    assert_eq!(sound.filenames(), vec!["land_wheel_skid.wav".to_string()]);
}

#[test]
fn test_ski_skid_sparks() {
    let mut scene = create_test_scene();
    let (mut services, sound, _mission) = create_recording_services(false);
    let ctx = SimContext::new();
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
    if let Some(aircraft) = scene.object_mut(heli).and_then(|o| o.aircraft_mut()) {
        for gear in aircraft.parts.iter_mut() {
            gear.flags = PartFlags::STATE | PartFlags::GEAR_SKI;
        }
    }
    scene.camera.reference = CameraRef::Spot;
    if let Some(model) = scene.fdm.get_mut(fdm) {
        model.velocity = Vector3::new(5.0, 5.0, -1.0);
    }

    touch_down(&mut scene, &mut services, &ctx, fdm, 0.1);

    let sparks: Vec<_> = scene
        .objects
        .iter()
        .filter_map(|(_, o)| o.smoke())
        .filter(|smoke| smoke.smoke_type == SmokeType::Sparks)
        .collect();
    assert_eq!(sparks.len(), 1);
    assert_eq!(sparks[0].ref_object, Some(heli));
    // Below the skis: belly height plus gear height
    assert_position_eq(&sparks[0].respawn_offset, &Vector3::new(0.0, 0.0, -1.5), 1e-12);
    assert_eq!(sparks[0].radius_max, 12.0);
    assert_eq!(sound.filenames(), vec!["land_ski_skid.wav".to_string()]);
}

#[test]
fn test_landing_effects_without_event_sounds() {
    let mut scene = create_test_scene();
    scene.config.event_sounds = false;
    let (mut services, sound, _mission) = create_recording_services(false);
    let ctx = SimContext::new();
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
    if let Some(aircraft) = scene.object_mut(heli).and_then(|o| o.aircraft_mut()) {
        for gear in aircraft.parts.iter_mut() {
            gear.flags = PartFlags::empty();
        }
    }
    if let Some(model) = scene.fdm.get_mut(fdm) {
        model.velocity = Vector3::new(5.0, 5.0, -1.0);
    }

    assert_eq!(
        touch_down(&mut scene, &mut services, &ctx, fdm, 0.1),
        Some(CrashCause::None)
    );
    assert_eq!(
        count_objects(&scene, |o| o.smoke().is_some_and(|s| s.ref_object == Some(heli))),
        1
    );
    assert!(sound.filenames().is_empty());
}

#[test]
fn test_belly_landing_without_contact_bounds() {
    let mut scene = create_test_scene();
    let (mut services, sound, _mission) = create_recording_services(false);
    let ctx = SimContext::new();
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
    if let Some(object) = scene.object_mut(heli) {
        object.contact_bounds = None;
        if let Some(aircraft) = object.aircraft_mut() {
            for gear in aircraft.parts.iter_mut() {
                gear.flags = PartFlags::empty();
            }
        }
    }
    scene.camera.reference = CameraRef::Spot;
    if let Some(model) = scene.fdm.get_mut(fdm) {
        model.velocity = Vector3::new(5.0, 5.0, -1.0);
    }

    assert_eq!(
        touch_down(&mut scene, &mut services, &ctx, fdm, 0.1),
        Some(CrashCause::None)
    );
    assert_eq!(count_objects(&scene, |o| o.smoke().is_some()), 0);
    assert_eq!(sound.filenames(), vec!["land_belly.wav".to_string()]);
}

#[test]
fn test_overspeed_then_ground_contact() {
    let mut scene = create_test_scene();
    let (mut services, sound, mission) = create_recording_services(false);
    let ctx = SimContext::new();
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::new(0.0, 0.0, 300.0));
    scene.player = Some(heli);

    assert!(overspeed(&mut scene, &mut services, &ctx, fdm, 120.0, 80.0, 100.0));

    let object = scene.object(heli).expect("aircraft");
    assert!(object.hit_points <= 0.1 * object.hit_points_max);
    assert_eq!(
        object.aircraft().map(|a| a.air_worthy_state),
        Some(AirWorthyState::OutOfControl)
    );
    assert_eq!(
        count_objects(&scene, |o| o.smoke().is_some_and(|s| s.ref_object == Some(heli))),
        1
    );
    assert_eq!(scene.camera.reference, CameraRef::Cockpit);

    // Already failing: the ground contact wrecks it without a fireball or banner
    let cause = touch_down(&mut scene, &mut services, &ctx, fdm, 0.5);
    assert_eq!(cause, Some(CrashCause::OutOfControl));
    assert_eq!(count_objects(&scene, |o| o.explosion().is_some()), 0);
    assert_eq!(scene.banner, vec!["STRUCTURE OVERSPEED FAILURE".to_string()]);
    assert_eq!(scene.camera.reference, CameraRef::Spot);
    assert_eq!(sound.filenames(), vec!["crash_ground.wav".to_string()]);
    assert_eq!(mission.calls(), vec![MissionCall::Destroy(heli)]);

    // A wreck hitting the ground again is silent
    let cause = touch_down(&mut scene, &mut services, &ctx, fdm, 0.5);
    assert_eq!(cause, Some(CrashCause::NotFlyable));
    assert_eq!(sound.filenames().len(), 1);
}

#[test]
fn test_parked_notifies_mission() {
    let mut scene = create_test_scene();
    let ctx = SimContext::new();
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
    let pad = create_object(&mut scene, &ctx, ObjectType::Helipad).expect("helipad");

    let mission = crate::common::RecordingMission::default();
    let mut services = sar_core::resources::SimServices::default()
        .with_ground(crate::common::ScriptedGround {
            over_water: false,
            hit_list: vec![pad],
        })
        .with_mission(mission.clone());

    parked(&scene, &mut services, fdm);
    assert_eq!(mission.calls(), vec![MissionCall::Land(heli, vec![pad])]);

    scene.player_has_crashed = true;
    parked(&scene, &mut services, fdm);
    assert_eq!(mission.calls().len(), 1);
}

#[test]
fn test_slewing_ignores_contact() {
    let mut scene = create_test_scene();
    let (mut services, _sound, mission) = create_recording_services(false);
    let ctx = SimContext::new();
    let (heli, fdm) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
    assert!(set_slew(&mut scene, heli, true));

    assert_eq!(touch_down(&mut scene, &mut services, &ctx, fdm, 5.0), None);
    assert!(!overspeed(&mut scene, &mut services, &ctx, fdm, 500.0, 80.0, 100.0));
    assert!(mission.calls().is_empty());
}
