use bevy::log::info;

use super::board::board_object;
use crate::ecs::ObjectId;
use crate::resources::{Scene, SimContext, SimServices};

const NO_ROOM_MESSAGE: &str = "No room left for additional passengers!";

/// Grab a human with whatever hangs from the aircraft's hoist rope.
///
/// Refused when the aircraft has no hoist, has no passenger room left or the
/// hoist already carries someone. The player is told when the cabin is full,
/// unless another message is still on screen.
pub fn pick_up_human(
    scene: &mut Scene,
    ctx: &SimContext,
    aircraft: ObjectId,
    human: ObjectId,
) -> bool {
    let Some(mass) = scene
        .object(human)
        .and_then(|object| object.human())
        .map(|payload| payload.mass)
    else {
        return false;
    };
    let warn_full = scene.is_player(aircraft) && !scene.is_showing_message(ctx.now_ms());

    let Some(carrier) = scene.object_mut(aircraft).and_then(|o| o.aircraft_mut()) else {
        return false;
    };
    let has_room = carrier.has_passenger_room();
    let Some(hoist) = carrier.hoist.as_mut() else {
        return false;
    };
    if !has_room {
        if warn_full {
            scene.show_message(ctx, NO_ROOM_MESSAGE);
        }
        return false;
    }
    if !hoist.add_occupant(human, mass) {
        return false;
    }
    let mode = hoist.deployment;

    if let Some(payload) = scene.object_mut(human).and_then(|o| o.human_mut()) {
        payload.apply_pickup(mode);
    }
    true
}

/// Reel the hoist in and board everyone riding it.
///
/// The hoist is emptied even when boarding fails. Returns how many objects
/// came aboard.
pub fn hoist_in(scene: &mut Scene, services: &mut SimServices, aircraft: ObjectId) -> usize {
    let is_player = scene.is_player(aircraft);
    let Some(object) = scene.object_mut(aircraft) else {
        return 0;
    };
    let name = object.display_name(aircraft);
    let Some(carrier) = object.aircraft_mut() else {
        return 0;
    };
    let prev_passengers = carrier.passengers;
    let Some(hoist) = carrier.hoist.as_mut() else {
        return 0;
    };
    let occupants = hoist.take_occupants();

    let mut boarded = 0;
    for occupant in occupants.into_iter().filter(|occupant| *occupant != aircraft) {
        let Some(passenger) = scene.object(occupant) else {
            continue;
        };
        if is_player {
            if let Some(message) = passenger.human().and_then(|h| h.enter_message.clone()) {
                scene.add_message(message);
            }
        }
        if board_object(scene, services, aircraft, occupant) {
            boarded += 1;
        }
    }

    let passengers = scene
        .object(aircraft)
        .and_then(|o| o.aircraft())
        .map(|a| (a.passengers, a.passengers_max));
    if let Some((passengers, passengers_max)) = passengers {
        if passengers > prev_passengers {
            let message = if is_player {
                format!("Passengers: {}({})", passengers, passengers_max)
            } else {
                format!("{} picked up {} passengers", name, passengers - prev_passengers)
            };
            scene.add_message(message);
        }
    }

    info!("{} hoisted in {} objects", name, boarded);
    services.mission.hoist_in_notify(aircraft, boarded);
    boarded
}
