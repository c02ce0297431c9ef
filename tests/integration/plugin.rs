use nalgebra::Vector3;
use pretty_assertions::assert_eq;
use sar_core::{
    components::{AirWorthyState, Direction, ObjectType},
    plugins::{FdmEvent, ObjectCollisionEvent, RescueCommand, WarpRequest},
    resources::CoreConfig,
    systems::{create_object, effects::explosion_create},
};

use crate::common::{
    assert_position_eq, create_recording_services, create_test_helicopter, create_test_survivor,
    MissionCall, TestAppBuilder,
};

#[test]
fn test_clock_follows_time_scale() {
    let mut app = TestAppBuilder::new().with_time_scale(0.0).build();
    app.run_steps(5);
    assert_eq!(app.context().now_ms(), 0);
    assert!(app.context().tick() >= 5);

    app.context_mut().set_time_scale(1.0);
    app.context_mut().advance(250);
    assert_eq!(app.context().now_ms(), 250);
}

#[test]
fn test_touch_down_event_crashes_player() {
    let (services, sound, mission) = create_recording_services(false);
    let mut app = TestAppBuilder::new()
        .with_config(CoreConfig::default())
        .with_services(services)
        .build();

    let ctx = app.context();
    let (heli, fdm) = {
        let mut scene = app.scene_mut();
        let created = create_test_helicopter(&mut scene, &ctx, Vector3::new(0.0, 0.0, 50.0));
        scene.player = Some(created.0);
        created
    };

    app.send(FdmEvent::TouchDown {
        fdm,
        impact_coeff: 3.0,
    });
    app.run_frame();

    let scene = app.scene();
    assert!(scene.player_has_crashed);
    assert_eq!(
        scene.object(heli).and_then(|o| o.aircraft()).map(|a| a.air_worthy_state),
        Some(AirWorthyState::NotFlyable)
    );
    assert_eq!(mission.calls(), vec![MissionCall::Destroy(heli)]);
    // The plugin's scene has no crash sound registered
    assert!(sound.filenames().is_empty());
}

#[test]
fn test_collision_event_spins_aircraft_out() {
    let (services, _sound, mission) = create_recording_services(false);
    let mut app = TestAppBuilder::new().with_services(services).build();

    let ctx = app.context();
    let (heli, tower) = {
        let mut scene = app.scene_mut();
        let (heli, _) = create_test_helicopter(&mut scene, &ctx, Vector3::new(0.0, 0.0, 80.0));
        let tower = create_object(&mut scene, &ctx, ObjectType::Static).expect("tower");
        if let Some(object) = scene.object_mut(tower) {
            object.position = Vector3::new(0.0, 10.0, 80.0);
        }
        (heli, tower)
    };

    app.send(ObjectCollisionEvent {
        victim: heli,
        obstruction: tower,
        impact_coeff: 0.8,
    });
    app.run_frame();

    let scene = app.scene();
    assert_eq!(
        scene.object(heli).and_then(|o| o.aircraft()).map(|a| a.air_worthy_state),
        Some(AirWorthyState::OutOfControl)
    );
    assert!(scene.objects.iter().any(|(_, o)| o.explosion().is_some()));
    assert!(mission.calls().is_empty());
}

#[test]
fn test_warp_requests() {
    let mut app = TestAppBuilder::new().build();
    let ctx = app.context();
    let (heli, pad) = {
        let mut scene = app.scene_mut();
        let (heli, _) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
        let pad = create_object(&mut scene, &ctx, ObjectType::Helipad).expect("pad");
        if let Some(object) = scene.object_mut(pad) {
            object.position = Vector3::new(-300.0, 40.0, 15.0);
        }
        (heli, pad)
    };

    app.send(WarpRequest::to(heli, Some(Vector3::new(1.0, 2.0, 3.0)), None));
    app.run_frame();
    let position = app.scene().object(heli).expect("heli").position;
    assert_position_eq(&position, &Vector3::new(1.0, 2.0, 3.0), 1e-12);

    app.send(WarpRequest::relative_to(
        heli,
        pad,
        Some(Vector3::new(0.0, 0.0, 2.0)),
        Some(Direction::default()),
    ));
    app.run_frame();
    let position = app.scene().object(heli).expect("heli").position;
    assert_position_eq(&position, &Vector3::new(-300.0, 40.0, 17.0), 1e-12);
}

#[test]
fn test_rescue_commands() {
    let (services, _sound, mission) = create_recording_services(false);
    let mut app = TestAppBuilder::new().with_services(services).build();
    let ctx = app.context();
    let (heli, survivor) = {
        let mut scene = app.scene_mut();
        let (heli, _) = create_test_helicopter(&mut scene, &ctx, Vector3::zeros());
        let survivor = create_test_survivor(&mut scene, &ctx, 70.0);
        (heli, survivor)
    };

    // Both commands are handled in send order within one frame
    app.send(RescueCommand::PickUp {
        aircraft: heli,
        human: survivor,
    });
    app.send(RescueCommand::HoistIn { aircraft: heli });
    app.run_frame();

    let scene = app.scene();
    assert!(!scene.objects.is_alive(survivor));
    assert_eq!(scene.object(heli).and_then(|o| o.aircraft()).map(|a| a.passengers), Some(1));
    assert_eq!(
        mission.calls(),
        vec![
            MissionCall::PassengersEnter(heli, 1),
            MissionCall::HoistIn(heli, 1)
        ]
    );
    assert_eq!(scene.messages, vec!["Rescue 1 picked up 1 passengers".to_string()]);
}

#[test]
fn test_mortality_runs_each_frame() {
    let mut app = TestAppBuilder::new().with_time_scale(0.0).build();
    let ctx = app.context();
    let (burst, lasting) = {
        let mut scene = app.scene_mut();
        let burst = explosion_create(&mut scene, &ctx, Vector3::zeros(), 4.0, None).expect("boom");
        let lasting =
            explosion_create(&mut scene, &ctx, Vector3::zeros(), 4.0, None).expect("boom");
        scene.object_mut(burst).expect("live").life_span = ctx.after(100);
        scene.object_mut(lasting).expect("live").life_span = ctx.after(60_000);
        (burst, lasting)
    };

    app.run_frame();
    assert!(app.scene().objects.is_alive(burst));

    app.context_mut().set_time_scale(1.0);
    app.context_mut().advance(100);
    app.run_frame();
    assert!(!app.scene().objects.is_alive(burst));
    assert!(app.scene().objects.is_alive(lasting));
}
