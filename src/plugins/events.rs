use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::Direction;
use crate::ecs::ObjectId;
use crate::resources::{FdmId, Scene, SimContext, SimServices};
use crate::systems::{
    airborne, do_mortality, hoist_in, object_collision, overspeed, parked, pick_up_human,
    touch_down, warp_object, warp_relative,
};

/// Callbacks raised by the flight dynamics library
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum FdmEvent {
    Airborne(FdmId),
    TouchDown {
        fdm: FdmId,
        impact_coeff: f64,
    },
    Parked(FdmId),
    Overspeed {
        fdm: FdmId,
        cur_speed: f64,
        overspeed_expected: f64,
        overspeed: f64,
    },
}

/// Raised by collision detection when `victim` runs into `obstruction`
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ObjectCollisionEvent {
    pub victim: ObjectId,
    pub obstruction: ObjectId,
    pub impact_coeff: f64,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RescueCommand {
    PickUp { aircraft: ObjectId, human: ObjectId },
    HoistIn { aircraft: ObjectId },
}

/// Move an object, optionally relative to another one
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct WarpRequest {
    pub object: ObjectId,
    pub reference: Option<ObjectId>,
    pub position: Option<Vector3<f64>>,
    pub direction: Option<Direction>,
}

impl WarpRequest {
    pub fn to(object: ObjectId, position: Option<Vector3<f64>>, direction: Option<Direction>) -> Self {
        Self {
            object,
            reference: None,
            position,
            direction,
        }
    }

    pub fn relative_to(
        object: ObjectId,
        reference: ObjectId,
        offset_position: Option<Vector3<f64>>,
        offset_direction: Option<Direction>,
    ) -> Self {
        Self {
            object,
            reference: Some(reference),
            position: offset_position,
            direction: offset_direction,
        }
    }
}

/// Advance the simulation clock by the frame time, keeping sub-millisecond remainders
pub fn advance_clock(time: Res<Time>, mut ctx: ResMut<SimContext>, mut carry: Local<f64>) {
    let elapsed = *carry + time.delta_secs_f64() * 1000.0;
    let whole = elapsed.floor();
    *carry = elapsed - whole;
    ctx.advance(whole as u64);
}

pub fn handle_fdm_events(
    mut events: EventReader<FdmEvent>,
    mut scene: ResMut<Scene>,
    mut services: ResMut<SimServices>,
    ctx: Res<SimContext>,
) {
    for event in events.read() {
        match *event {
            FdmEvent::Airborne(fdm) => airborne(&scene, fdm),
            FdmEvent::TouchDown { fdm, impact_coeff } => {
                touch_down(&mut scene, &mut services, &ctx, fdm, impact_coeff);
            }
            FdmEvent::Parked(fdm) => parked(&scene, &mut services, fdm),
            FdmEvent::Overspeed {
                fdm,
                cur_speed,
                overspeed_expected,
                overspeed: limit,
            } => {
                overspeed(
                    &mut scene,
                    &mut services,
                    &ctx,
                    fdm,
                    cur_speed,
                    overspeed_expected,
                    limit,
                );
            }
        }
    }
}

pub fn handle_collisions(
    mut events: EventReader<ObjectCollisionEvent>,
    mut scene: ResMut<Scene>,
    mut services: ResMut<SimServices>,
    ctx: Res<SimContext>,
) {
    for event in events.read() {
        object_collision(
            &mut scene,
            &mut services,
            &ctx,
            event.victim,
            event.obstruction,
            event.impact_coeff,
        );
    }
}

pub fn handle_rescue_commands(
    mut commands: EventReader<RescueCommand>,
    mut scene: ResMut<Scene>,
    mut services: ResMut<SimServices>,
    ctx: Res<SimContext>,
) {
    for command in commands.read() {
        match *command {
            RescueCommand::PickUp { aircraft, human } => {
                if !pick_up_human(&mut scene, &ctx, aircraft, human) {
                    debug!("{} could not pick up {}", aircraft, human);
                }
            }
            RescueCommand::HoistIn { aircraft } => {
                hoist_in(&mut scene, &mut services, aircraft);
            }
        }
    }
}

pub fn handle_warp_requests(mut requests: EventReader<WarpRequest>, mut scene: ResMut<Scene>) {
    for request in requests.read() {
        match request.reference {
            Some(reference) => warp_relative(
                &mut scene,
                request.object,
                reference,
                request.position,
                request.direction,
            ),
            None => warp_object(&mut scene, request.object, request.position, request.direction),
        }
    }
}

pub fn mortality_system(
    mut scene: ResMut<Scene>,
    mut services: ResMut<SimServices>,
    ctx: Res<SimContext>,
) {
    let deleted = do_mortality(&mut scene, &mut services, &ctx);
    if deleted > 0 {
        debug!("Mortality removed {} objects", deleted);
    }
}
