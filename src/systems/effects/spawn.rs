use bevy::log::debug;
use nalgebra::Vector3;

use crate::components::{
    CenterOffset, ColorEmission, CrashFlags, CrashType, Explosion, FrameAnimation, Object,
    ObjectType, Smoke, SmokeType, SmokeUnit,
};
use crate::ecs::ObjectId;
use crate::resources::{Scene, SimContext};
use crate::systems::objects::create_object;
use crate::utils::miles_to_meters;

const SPARKS_RESPAWN_INTERVAL: u64 = 1_000; // ms
const SPARKS_UNITS: usize = 20;
const SMOKE_TEMPERATURE: f64 = 0.25;

/// Parameters of a smoke trail
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeParams {
    /// Where units spawn relative to the trail object [m]
    pub respawn_offset: Vector3<f64>,
    /// [m]
    pub radius_start: f64,
    pub radius_max: f64,
    /// Growth rate, negative to derive it from the unit count and interval [m/s]
    pub radius_rate: f64,
    pub hide_at_max: bool,
    pub total_units: usize,
    /// [ms]
    pub respawn_interval: u64,
    pub texture: Option<String>,
    pub ref_object: Option<ObjectId>,
    /// Absolute deletion time, 0 for never [ms]
    pub life_span: u64,
}

impl Default for SmokeParams {
    fn default() -> Self {
        Self {
            respawn_offset: Vector3::zeros(),
            radius_start: 1.0,
            radius_max: 1.0,
            radius_rate: -1.0,
            hide_at_max: true,
            total_units: 1,
            respawn_interval: 1_000,
            texture: None,
            ref_object: None,
            life_span: 0,
        }
    }
}

fn spawn(scene: &mut Scene, ctx: &SimContext, object_type: ObjectType) -> Option<ObjectId> {
    create_object(scene, ctx, object_type).ok()
}

/// Create a smoke trail or spark shower at `position`
pub fn smoke_create(
    scene: &mut Scene,
    ctx: &SimContext,
    smoke_type: SmokeType,
    position: Vector3<f64>,
    params: SmokeParams,
) -> Option<ObjectId> {
    let id = spawn(scene, ctx, ObjectType::Smoke)?;
    let object = scene.objects.get_mut(id)?;

    let radius_rate = if params.radius_rate < 0.0 {
        let dt = params.total_units as f64 * params.respawn_interval as f64 / 1000.0;
        if dt > 0.0 {
            (params.radius_max - params.radius_start) / dt
        } else {
            0.0
        }
    } else {
        params.radius_rate
    };

    object.position = position;
    object.range = miles_to_meters(match params.radius_max {
        r if r >= 400.0 => 18.0,
        r if r >= 200.0 => 16.0,
        r if r >= 100.0 => 13.0,
        _ => 10.0,
    });
    object.add_contact_spherical(CrashFlags::empty(), CrashType::Obstruction, params.radius_start);
    object.life_span = params.life_span;
    object.temperature = SMOKE_TEMPERATURE;

    if let Some(smoke) = object.smoke_mut() {
        *smoke = Smoke {
            smoke_type,
            respawn_offset: params.respawn_offset,
            radius_start: params.radius_start,
            radius_max: params.radius_max,
            radius_rate,
            hide_at_max: params.hide_at_max,
            delete_when_no_units: false,
            respawn_interval: params.respawn_interval,
            respawn_next: 0,
            texture: params.texture,
            ref_object: params.ref_object,
            units: vec![SmokeUnit::default(); params.total_units],
        };
    }

    debug!("Created {:?} trail {} of {} units", smoke_type, id, params.total_units);
    Some(id)
}

/// Create a shower of sparks flying out to `distance`
pub fn smoke_create_sparks(
    scene: &mut Scene,
    ctx: &SimContext,
    position: Vector3<f64>,
    respawn_offset: Vector3<f64>,
    distance: f64,
    ref_object: Option<ObjectId>,
    life_span: u64,
) -> Option<ObjectId> {
    smoke_create(
        scene,
        ctx,
        SmokeType::Sparks,
        position,
        SmokeParams {
            respawn_offset,
            radius_start: 1.0,
            radius_max: distance,
            radius_rate: 1.0,
            hide_at_max: false,
            total_units: SPARKS_UNITS,
            respawn_interval: SPARKS_RESPAWN_INTERVAL,
            texture: None,
            ref_object,
            life_span,
        },
    )
}

fn animation(ctx: &SimContext, frame_interval: u64) -> FrameAnimation {
    FrameAnimation {
        frame_interval,
        next_frame: ctx.after(frame_interval),
        current_frame: 0,
        repeats: 0,
        total_repeats: 1,
    }
}

/// Create a fireball that plays its animation once
pub fn explosion_create(
    scene: &mut Scene,
    ctx: &SimContext,
    position: Vector3<f64>,
    radius: f64,
    ref_object: Option<ObjectId>,
) -> Option<ObjectId> {
    let id = spawn(scene, ctx, ObjectType::Explosion)?;
    let frame_interval = scene.config.explosion_frame_interval_ms;
    let texture = scene.config.textures.explosion.clone();
    let texture_ir = scene.config.textures.explosion_ir.clone();
    let object = scene.objects.get_mut(id)?;

    object.position = position;
    object.range = miles_to_meters(match radius {
        r if r >= 20.0 => 14.0,
        r if r >= 12.0 => 10.0,
        r if r >= 4.0 => 6.0,
        _ => 3.0,
    });
    object.temperature = 1.0;
    set_explosion(
        object,
        Explosion {
            radius,
            color_emission: ColorEmission::IsLight,
            center_offset: CenterOffset::None,
            animation: animation(ctx, frame_interval),
            texture: Some(texture),
            texture_ir: Some(texture_ir),
            ref_object,
        },
    );

    debug!("Created explosion {} radius {:.1}", id, radius);
    Some(id)
}

/// Create a water splash, kept above the surface by its base offset
pub fn splash_create(
    scene: &mut Scene,
    ctx: &SimContext,
    position: Vector3<f64>,
    radius: f64,
    ref_object: Option<ObjectId>,
) -> Option<ObjectId> {
    let id = spawn(scene, ctx, ObjectType::Explosion)?;
    let frame_interval = scene.config.splash_frame_interval_ms;
    let texture = scene.config.textures.splash.clone();
    let object = scene.objects.get_mut(id)?;

    object.position = position;
    object.range = miles_to_meters(match radius {
        r if r >= 8.0 => 10.0,
        r if r >= 4.0 => 6.0,
        _ => 3.0,
    });
    object.temperature = 0.0;
    set_explosion(
        object,
        Explosion {
            radius,
            color_emission: ColorEmission::None,
            center_offset: CenterOffset::Base,
            animation: animation(ctx, frame_interval),
            texture: Some(texture),
            texture_ir: None,
            ref_object,
        },
    );

    debug!("Created splash {} radius {:.1}", id, radius);
    Some(id)
}

fn set_explosion(object: &mut Object, explosion: Explosion) {
    if let Some(payload) = object.explosion_mut() {
        *payload = explosion;
    }
}
