use bevy::log::{debug, info};
use nalgebra::Vector3;

use super::bridge::{match_object_from_fdm, match_object_to_fdm};
use super::classify::{classify_touch_down, CrashCause, TouchDownState};
use super::crash::{
    crash_effect_radius, play_object_sound, play_scene_sound, set_aircraft_crashed,
    spawn_crash_fireball,
};
use crate::components::{AirWorthyState, Aircraft, CameraRef, PartFlags, PartType, SmokeType};
use crate::ecs::ObjectId;
use crate::resources::{FdmId, Scene, SimContext, SimServices};
use crate::systems::effects::{
    delete_effects, smoke_create, smoke_create_sparks, splash_create, SmokeCleanup, SmokeParams,
};
use crate::systems::objects::is_slew;
use crate::utils::{
    mph_to_mps, ASSUMED_FUEL_REMAINING, SKID_SPEED_MPH, WHEEL_SKID_BRAKED_MPH,
    WHEEL_SKID_ROLLING_MPH,
};

const CRASH_BANNER: &str = "CRASH";
pub(crate) const POST_CRASH_BANNER: &str = "PRESS SPACE TO CONTINUE";

const BELLY_SPARKS_LIFE: u64 = 5_000; // ms
const SKI_SPARKS_LIFE: u64 = 4_000; // ms
const WHEEL_SMOKE_LIFE: u64 = 3_500; // ms

/// How a safe landing looks and sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingEffect {
    /// Scraped in on the fuselage
    Belly,
    Skis,
    /// Skis sliding fast enough to throw sparks
    SkisSkid,
    /// Tires smoking
    WheelSkid,
}

/// Pick the landing effect from the first landing gear and the ground speed.
///
/// # Arguments
/// * `aircraft` - The aircraft that just touched down
/// * `land_speed` - Horizontal speed at touch down [m/s]
pub fn landing_effect(aircraft: &Aircraft, land_speed: f64) -> Option<LandingEffect> {
    let gear_down = aircraft
        .part(PartType::LandingGear, 0)
        .filter(|gear| gear.flags.contains(PartFlags::STATE));

    let Some(gear) = gear_down else {
        return Some(if land_speed > mph_to_mps(SKID_SPEED_MPH) {
            LandingEffect::Belly
        } else {
            LandingEffect::Skis
        });
    };

    if gear.flags.contains(PartFlags::GEAR_SKI) {
        return Some(if land_speed > mph_to_mps(SKID_SPEED_MPH) {
            LandingEffect::SkisSkid
        } else {
            LandingEffect::Skis
        });
    }

    let skid_speed = if aircraft.wheel_brakes_state.is_engaged() {
        WHEEL_SKID_BRAKED_MPH
    } else {
        WHEEL_SKID_ROLLING_MPH
    };
    (land_speed > mph_to_mps(skid_speed)).then_some(LandingEffect::WheelSkid)
}

/// Handle a flight model reporting ground contact.
///
/// Syncs the object from its model, classifies the contact and either wrecks
/// the object or plays the landing effects. Returns the classification, or
/// `None` when the model has no object or the object is slewing.
pub fn touch_down(
    scene: &mut Scene,
    services: &mut SimServices,
    ctx: &SimContext,
    fdm: FdmId,
    impact_coeff: f64,
) -> Option<CrashCause> {
    let id = match_object_from_fdm(scene, fdm)?;
    if is_slew(scene, id) {
        return None;
    }

    let over_water = services.ground.ground_hit_check(scene, id).over_water;
    match_object_to_fdm(scene, id);

    let object = scene.object(id)?;
    let aircraft = object.aircraft();
    let state = TouchDownState {
        air_worthy: aircraft.map_or(AirWorthyState::Flyable, |a| a.air_worthy_state),
        impact_coeff,
        over_water,
        has_floats: aircraft.is_some_and(Aircraft::has_floats),
        pitch: object.direction.pitch,
        bank: object.direction.bank,
    };

    let cause = classify_touch_down(&state);
    debug!("Touch down of {}: {:?} impact {:.2}", id, cause, impact_coeff);

    if cause.is_crash() {
        crash_on_touch_down(scene, services, ctx, id, cause, impact_coeff, over_water);
    } else {
        land(scene, services, ctx, id, over_water);
    }
    Some(cause)
}

fn crash_on_touch_down(
    scene: &mut Scene,
    services: &mut SimServices,
    ctx: &SimContext,
    id: ObjectId,
    cause: CrashCause,
    impact_coeff: f64,
    over_water: bool,
) {
    let radius = crash_effect_radius(scene, id);
    let Some(object) = scene.objects.get_mut(id) else {
        return;
    };
    let position = object.position;
    let name = object.display_name(id);
    let fuel_remaining = object
        .aircraft()
        .map_or(ASSUMED_FUEL_REMAINING, Aircraft::fuel_remaining);

    let is_aircraft = match object.aircraft_mut() {
        Some(aircraft) => {
            if over_water {
                aircraft.on_water = true;
            }
            true
        }
        None => false,
    };
    if is_aircraft {
        set_aircraft_crashed(scene, id);
    }

    let is_player = scene.is_player(id);
    if is_player {
        scene.player_has_crashed = true;
        if !cause.suppresses_effects() {
            scene.banner_clear();
            scene.banner_append(CRASH_BANNER);
            if let Some(text) = cause.banner_text(impact_coeff) {
                scene.banner_append(text);
            }
            scene.banner_append(POST_CRASH_BANNER);
        }
    } else {
        scene.add_message(format!("*** {} has crashed! ***", name));
    }

    let splash = |scene: &mut Scene, services: &mut SimServices| {
        delete_effects(scene, services, Some(id), SmokeCleanup::StopRespawn);
        splash_create(scene, ctx, position, radius, Some(id));
    };

    match cause {
        CrashCause::NotFlyable => {}
        CrashCause::OutOfControl => {
            if over_water {
                splash(scene, services);
            }
        }
        _ => {
            if fuel_remaining > 0.0 && !over_water {
                spawn_crash_fireball(scene, services, ctx, id, position, radius);
            } else if over_water {
                splash(scene, services);
            }
        }
    }

    if is_player && cause != CrashCause::NotFlyable {
        scene.camera.view(CameraRef::Spot, id);
    }

    if cause != CrashCause::NotFlyable {
        let sound = if over_water { "splash_aircraft" } else { "crash_ground" };
        play_scene_sound(scene, services, id, sound);
    }

    info!("{} crashed on touch down: {:?}", name, cause);
    services.mission.destroy_notify(id);
}

fn land(
    scene: &mut Scene,
    services: &mut SimServices,
    ctx: &SimContext,
    id: ObjectId,
    over_water: bool,
) {
    let Some(object) = scene.objects.get_mut(id) else {
        return;
    };
    let position = object.position;
    // Sparks fly out to twice the contact radius, none without bounds
    let spark_distance = object
        .contact_bounds
        .as_ref()
        .map(|bounds| bounds.flat_radius() * 2.0);
    let Some(aircraft) = object.aircraft_mut() else {
        return;
    };

    aircraft.on_water = over_water;
    let land_speed = aircraft.velocity.x.hypot(aircraft.velocity.y);
    let Some(effect) = landing_effect(aircraft, land_speed) else {
        return;
    };
    let belly_height = aircraft.belly_height;
    let gear_height = aircraft.gear_height;
    let gear_offsets: Vec<Vector3<f64>> = aircraft.landing_gear().map(|gear| gear.pos_max).collect();

    debug!("{} landed: {:?}", id, effect);
    match effect {
        LandingEffect::Belly => {
            if let Some(distance) = spark_distance {
                smoke_create_sparks(
                    scene,
                    ctx,
                    position,
                    Vector3::new(0.0, 0.0, -belly_height),
                    distance,
                    Some(id),
                    ctx.after(BELLY_SPARKS_LIFE),
                );
            }
            play_object_sound(scene, services, id, "land_belly");
        }
        LandingEffect::Skis => play_object_sound(scene, services, id, "land_ski"),
        LandingEffect::SkisSkid => {
            if let Some(distance) = spark_distance {
                smoke_create_sparks(
                    scene,
                    ctx,
                    position,
                    Vector3::new(0.0, 0.0, -(belly_height + gear_height)),
                    distance,
                    Some(id),
                    ctx.after(SKI_SPARKS_LIFE),
                );
            }
            play_object_sound(scene, services, id, "land_ski_skid");
        }
        LandingEffect::WheelSkid => {
            let texture = scene.config.textures.smoke_light.clone();
            for offset in gear_offsets {
                smoke_create(
                    scene,
                    ctx,
                    SmokeType::Smoke,
                    position,
                    SmokeParams {
                        respawn_offset: offset,
                        radius_start: 0.25,
                        radius_max: 1.5,
                        radius_rate: -1.0,
                        hide_at_max: true,
                        total_units: 1,
                        respawn_interval: WHEEL_SMOKE_LIFE,
                        texture: Some(texture.clone()),
                        ref_object: None,
                        life_span: ctx.after(WHEEL_SMOKE_LIFE),
                    },
                );
            }
            play_object_sound(scene, services, id, "land_wheel_skid");
        }
    }
}
