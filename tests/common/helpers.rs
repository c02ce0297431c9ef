use nalgebra::Vector3;
use sar_core::{
    components::{
        AirWorthyState, CrashFlags, CrashType, DeploymentMode, Direction, EngineState, Hoist,
        HumanFlags, ObjectPart, ObjectType, PartFlags, PartType,
    },
    ecs::ObjectId,
    resources::{FdmId, Scene, SimContext, SimServices, SoundSource},
    systems::{create_object, fdm::create_fdm_model},
};

use crate::common::{RecordingMission, RecordingSound, ScriptedGround};

/// Scene with the standard crash and splash sounds
pub fn create_test_scene() -> Scene {
    let mut scene = Scene::default();
    for name in ["crash_ground", "splash_aircraft", "crash_obstruction"] {
        scene
            .sound_sources
            .add(SoundSource::new(name, Some(&format!("{}.wav", name)), None));
    }
    scene
}

/// Services wired to recorders, handing back the recorders
pub fn create_recording_services(
    over_water: bool,
) -> (SimServices, RecordingSound, RecordingMission) {
    let sound = RecordingSound::default();
    let mission = RecordingMission::default();
    let services = SimServices::default()
        .with_ground(ScriptedGround {
            over_water,
            hit_list: Vec::new(),
        })
        .with_sound(sound.clone())
        .with_mission(mission.clone());
    (services, sound, mission)
}

/// A flyable rescue helicopter with its gear down and a basket hoist
pub fn create_test_helicopter(
    scene: &mut Scene,
    ctx: &SimContext,
    position: Vector3<f64>,
) -> (ObjectId, FdmId) {
    let id = create_object(scene, ctx, ObjectType::Aircraft).expect("helicopter");
    let object = scene.object_mut(id).expect("live helicopter");
    object.name = Some("Rescue 1".to_string());
    object.position = position;
    object.direction = Direction::default();
    object.hit_points = 100.0;
    object.hit_points_max = 100.0;
    object.add_contact_cylindrical(
        CrashFlags::CRASH_OTHER | CrashFlags::CRASH_CAUSE,
        CrashType::Aircraft,
        6.0,
        0.0,
        4.0,
    );
    for name in [
        "land_ski",
        "land_ski_inside",
        "land_ski_skid",
        "land_belly",
        "land_wheel_skid",
    ] {
        object
            .sound_sources
            .add(SoundSource::new(name, Some(&format!("{}.wav", name)), None));
    }

    let aircraft = object.aircraft_mut().expect("aircraft payload");
    aircraft.air_worthy_state = AirWorthyState::Flyable;
    aircraft.engine_state = EngineState::On;
    aircraft.fuel = 400.0;
    aircraft.fuel_max = 800.0;
    aircraft.belly_height = 1.0;
    aircraft.gear_height = 0.5;
    aircraft.passengers_max = 4;
    aircraft.overspeed_expected = 80.0;
    aircraft.overspeed = 100.0;
    aircraft.parts.add(
        ObjectPart::new(PartType::LandingGear)
            .with_flags(PartFlags::STATE | PartFlags::GEAR_FIXED)
            .with_positions(Vector3::zeros(), Vector3::zeros(), Vector3::new(1.0, 0.0, -1.5)),
    );
    let mut hoist = Hoist::default();
    hoist.rope_max = 30.0;
    hoist.deployment = DeploymentMode::Basket;
    aircraft.hoist = Some(hoist);

    let fdm = create_fdm_model(scene, id).expect("flight model");
    (id, fdm)
}

/// A survivor waiting for rescue
pub fn create_test_survivor(scene: &mut Scene, ctx: &SimContext, mass: f64) -> ObjectId {
    let id = create_object(scene, ctx, ObjectType::Human).expect("survivor");
    let human = scene
        .object_mut(id)
        .and_then(|o| o.human_mut())
        .expect("human payload");
    human.flags = HumanFlags::NEED_RESCUE | HumanFlags::LYING | HumanFlags::ALERT;
    human.mass = mass;
    human.enter_message = Some("Thanks for the lift!".to_string());
    scene.humans_need_rescue.push(id);
    id
}
