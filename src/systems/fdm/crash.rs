use bevy::log::{debug, info};
use nalgebra::Vector3;

use crate::components::{AirWorthyState, Direction, EngineState, SmokeType};
use crate::ecs::ObjectId;
use crate::resources::{Scene, SimContext, SimServices};
use crate::systems::effects::{delete_effects, explosion_create, smoke_create, SmokeCleanup, SmokeParams};
use crate::systems::objects::warp_object;
use crate::utils::{CRASHED_BANK, CRASH_EFFECT_RADIUS_COEFF, MIN_CRASH_EFFECT_RADIUS};

const CRASH_SMOKE_UNITS: usize = 10;
const CRASH_SMOKE_RESPAWN_INTERVAL: u64 = 3_000; // ms

/// Put an aircraft into its wrecked state.
///
/// Anyone riding the hoist is dropped lying down, the hoist is emptied and
/// retracted, the engine stops and the airframe rolls onto its side with all
/// lights off.
pub fn set_aircraft_crashed(scene: &mut Scene, id: ObjectId) {
    let Some(object) = scene.objects.get_mut(id) else {
        return;
    };
    let heading = object.direction.heading;
    let Some(aircraft) = object.aircraft_mut() else {
        return;
    };

    let occupants = aircraft
        .hoist
        .as_mut()
        .map(|hoist| hoist.reset())
        .unwrap_or_default();
    aircraft.air_worthy_state = AirWorthyState::NotFlyable;
    aircraft.engine_state = EngineState::Off;
    for light in object.lights.iter_mut() {
        light.turn_off();
    }

    for occupant in occupants.into_iter().filter(|occupant| *occupant != id) {
        let Some(occupant) = scene.objects.get_mut(occupant) else {
            continue;
        };
        if let Some(human) = occupant.human_mut() {
            human.apply_crash();
        }
        occupant.direction.pitch = 0.0;
        occupant.direction.bank = 0.0;
    }

    warp_object(scene, id, None, Some(Direction::new(heading, 0.0, CRASHED_BANK)));
    info!("{} crashed", id);
}

/// Size of the fireball or splash left by a crashing object [m]
pub(crate) fn crash_effect_radius(scene: &Scene, id: ObjectId) -> f64 {
    let contact_radius = scene.object(id).map_or(0.0, |object| object.flat_contact_radius());
    (contact_radius * CRASH_EFFECT_RADIUS_COEFF).max(MIN_CRASH_EFFECT_RADIUS)
}

/// Burning wreck: a looping explosion with dark smoke rising above it.
///
/// Both effects reference the wreck and expire together. Existing smoke
/// trails of the wreck stop respawning first.
pub(crate) fn spawn_crash_fireball(
    scene: &mut Scene,
    services: &mut SimServices,
    ctx: &SimContext,
    id: ObjectId,
    position: Vector3<f64>,
    radius: f64,
) {
    delete_effects(scene, services, Some(id), SmokeCleanup::StopRespawn);

    let life_span = ctx.after(scene.config.crash_explosion_life_span_ms);
    if let Some(explosion) = explosion_create(scene, ctx, position, radius, Some(id)) {
        if let Some(object) = scene.objects.get_mut(explosion) {
            object.life_span = life_span;
            if let Some(payload) = object.explosion_mut() {
                payload.animation.total_repeats = -1;
            }
        }
    }

    let texture = scene.config.textures.smoke_dark.clone();
    smoke_create(
        scene,
        ctx,
        SmokeType::Smoke,
        position,
        SmokeParams {
            respawn_offset: Vector3::new(0.0, 0.0, radius),
            radius_start: radius,
            radius_max: radius * 3.0,
            radius_rate: -1.0,
            hide_at_max: true,
            total_units: CRASH_SMOKE_UNITS,
            respawn_interval: CRASH_SMOKE_RESPAWN_INTERVAL,
            texture: Some(texture),
            ref_object: Some(id),
            life_span,
        },
    );
}

/// Play one of the scene's event sounds at an object's position
pub(crate) fn play_scene_sound(scene: &Scene, services: &mut SimServices, id: ObjectId, name: &str) {
    if !scene.config.event_sounds {
        return;
    }
    let Some(object) = scene.object(id) else {
        return;
    };
    let played = scene.sound_sources.play(
        services.sound.as_mut(),
        name,
        &object.position,
        &object.direction,
        &scene.ear_position,
    );
    debug!("Scene sound {} for {}: {}", name, id, played);
}

/// Play one of an object's own sounds, the inside variant while in the cockpit
pub(crate) fn play_object_sound(scene: &Scene, services: &mut SimServices, id: ObjectId, name: &str) {
    if !scene.config.event_sounds {
        return;
    }
    let Some(object) = scene.object(id) else {
        return;
    };
    let name = if scene.camera.is_inside() {
        format!("{}_inside", name)
    } else {
        name.to_string()
    };
    object.sound_sources.play(
        services.sound.as_mut(),
        &name,
        &object.position,
        &object.direction,
        &scene.ear_position,
    );
}
