use bevy::log::{debug, info};
use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;

use super::bridge::match_object_from_fdm;
use super::crash::{crash_effect_radius, play_scene_sound, set_aircraft_crashed, spawn_crash_fireball};
use super::touch_down::POST_CRASH_BANNER;
use crate::components::{AirWorthyState, CameraRef, CrashFlags, EngineState, SmokeType};
use crate::ecs::ObjectId;
use crate::resources::{FdmId, Scene, SimContext, SimServices};
use crate::systems::effects::{delete_effects, smoke_create, SmokeCleanup, SmokeParams};
use crate::systems::objects::is_slew;
use crate::utils::{
    delta_radians, rotate_heading, sanitize_radians, DEFAULT_TOWER_OFFSET, MIN_TOWER_OFFSET,
    OVERSPEED_HIT_POINTS_COEFF, TOWER_OFFSET_COEFF,
};

const OVERSPEED_BANNER: &str = "STRUCTURE OVERSPEED FAILURE";
const COLLISION_BANNER: &str = "COLLISION";

const OVERSPEED_SMOKE_UNITS: usize = 15;
const OVERSPEED_SMOKE_RESPAWN_INTERVAL: u64 = 500; // ms
const COLLISION_VELOCITY_COEFF: f64 = 0.1;

/// A flight model lifted off
pub fn airborne(scene: &Scene, fdm: FdmId) {
    let Some(id) = match_object_from_fdm(scene, fdm) else {
        return;
    };
    if !is_slew(scene, id) {
        debug!("{} is airborne", id);
    }
}

/// A flight model came to rest on the ground.
///
/// Tells the mission layer what the object is standing on, unless the player
/// has already crashed.
pub fn parked(scene: &Scene, services: &mut SimServices, fdm: FdmId) {
    if scene.player_has_crashed {
        return;
    }
    let Some(id) = match_object_from_fdm(scene, fdm) else {
        return;
    };

    let hit_list = services.ground.hit_list(scene, id);
    debug!("{} parked on {} objects", id, hit_list.len());
    services.mission.land_notify(id, &hit_list);
}

/// A flight model went faster than its structure allows.
///
/// Past `overspeed` a flyable aircraft loses control, keeps at most a tenth
/// of its hit points and starts trailing smoke. Returns true when the
/// structure failed on this call.
pub fn overspeed(
    scene: &mut Scene,
    services: &mut SimServices,
    ctx: &SimContext,
    fdm: FdmId,
    cur_speed: f64,
    _overspeed_expected: f64,
    overspeed: f64,
) -> bool {
    let Some(id) = match_object_from_fdm(scene, fdm) else {
        return false;
    };
    if is_slew(scene, id) || cur_speed <= overspeed {
        return false;
    }

    let Some(object) = scene.objects.get_mut(id) else {
        return false;
    };
    let position = object.position;
    let contact_radius = object.flat_contact_radius();
    let Some(aircraft) = object.aircraft_mut() else {
        return false;
    };
    if aircraft.air_worthy_state != AirWorthyState::Flyable {
        return false;
    }
    aircraft.air_worthy_state = AirWorthyState::OutOfControl;

    object.hit_points = object
        .hit_points
        .min(object.hit_points_max * OVERSPEED_HIT_POINTS_COEFF);
    object.clear_crash_flags(CrashFlags::CRASH_OTHER);

    delete_effects(scene, services, Some(id), SmokeCleanup::Delete);
    let texture = scene.config.textures.smoke_medium.clone();
    smoke_create(
        scene,
        ctx,
        SmokeType::Smoke,
        position,
        SmokeParams {
            respawn_offset: Vector3::zeros(),
            radius_start: contact_radius * 0.25,
            radius_max: contact_radius * 2.5,
            radius_rate: -1.0,
            hide_at_max: true,
            total_units: OVERSPEED_SMOKE_UNITS,
            respawn_interval: OVERSPEED_SMOKE_RESPAWN_INTERVAL,
            texture: Some(texture),
            ref_object: Some(id),
            life_span: 0,
        },
    );

    if scene.is_player(id) {
        scene.player_has_crashed = true;
        scene.banner_clear();
        scene.banner_append(OVERSPEED_BANNER);
    }

    info!("{} overspeed failure at {:.1} m/s", id, cur_speed);
    true
}

/// Where to put the tower camera relative to a victim, and the bounce
fn deflect_aircraft(scene: &mut Scene, victim: ObjectId, obstruction: ObjectId) -> Vector3<f64> {
    let default_offset = Vector3::repeat(DEFAULT_TOWER_OFFSET);
    let (Some(object), Some(other)) = (scene.object(victim), scene.object(obstruction)) else {
        return default_offset;
    };
    let Some(aircraft) = object.aircraft() else {
        return default_offset;
    };

    let position = object.position;
    let delta = other.position - position;
    let bearing = sanitize_radians(FRAC_PI_2 - delta.y.atan2(delta.x));
    let bearing_obstruction = sanitize_radians(bearing - object.direction.heading);
    let velocity = aircraft.velocity;
    let bearing_velocity = sanitize_radians(FRAC_PI_2 - velocity.y.atan2(velocity.x));
    let theta = delta_radians(bearing_velocity, bearing_obstruction);

    let tower_offset = (object.flat_contact_radius() * TOWER_OFFSET_COEFF).max(MIN_TOWER_OFFSET);
    let fdm = aircraft.fdm;
    let landed = aircraft.landed;

    // Moving into the obstruction bounces the model off it
    if theta.abs() < FRAC_PI_2 {
        if let Some(model) = fdm.and_then(|fdm| scene.fdm.get_mut(fdm)) {
            model.velocity =
                rotate_heading(&model.velocity, 2.0 * (theta - FRAC_PI_2)) * COLLISION_VELOCITY_COEFF;
        }
    }

    if landed {
        set_aircraft_crashed(scene, victim);
    } else if let Some(aircraft) = scene.object_mut(victim).and_then(|o| o.aircraft_mut()) {
        aircraft.air_worthy_state = AirWorthyState::OutOfControl;
        aircraft.engine_state = EngineState::Off;
    }

    Vector3::new(
        -bearing.sin() * tower_offset,
        -bearing.cos() * tower_offset,
        tower_offset,
    )
}

/// `victim` flew into `obstruction`.
///
/// A flying aircraft goes out of control, one on the ground is wrecked. The
/// victim explodes, stops colliding with other objects and, for the player,
/// the tower camera is moved to watch.
pub fn object_collision(
    scene: &mut Scene,
    services: &mut SimServices,
    ctx: &SimContext,
    victim: ObjectId,
    obstruction: ObjectId,
    impact_coeff: f64,
) {
    if !scene.objects.is_alive(victim) || !scene.objects.is_alive(obstruction) {
        return;
    }
    if is_slew(scene, victim) {
        return;
    }

    let tower_offset = deflect_aircraft(scene, victim, obstruction);

    let radius = crash_effect_radius(scene, victim);
    let Some(object) = scene.objects.get_mut(victim) else {
        return;
    };
    object.clear_crash_flags(CrashFlags::CRASH_OTHER);
    let position = object.position;
    let name = object.display_name(victim);

    spawn_crash_fireball(scene, services, ctx, victim, position, radius);
    play_scene_sound(scene, services, victim, "crash_obstruction");

    if scene.is_player(victim) {
        scene.player_has_crashed = true;
        if !scene.camera.is_watching_from_outside(victim) {
            scene.camera.tower_position = position + tower_offset;
            scene.camera.view(CameraRef::Tower, victim);
        }

        let crash_type = scene
            .object(obstruction)
            .map(|other| other.crash_type())
            .unwrap_or_default();
        scene.banner_clear();
        scene.banner_append(COLLISION_BANNER);
        scene.banner_append(crash_type.banner_text());
        scene.banner_append(POST_CRASH_BANNER);
    }

    info!(
        "{} collided with {} ({:?}), impact {:.2}",
        name, obstruction, scene.object(obstruction).map(|o| o.crash_type()), impact_coeff
    );
}
