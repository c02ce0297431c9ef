use bevy::log::debug;

use crate::ecs::ObjectId;
use crate::resources::{Scene, SimServices};
use crate::systems::objects::delete_object;

/// Move `source` aboard `target` as a passenger.
///
/// The source object is deleted once aboard. Refused when the source is gone
/// or is the target itself, or when the target carries no passengers or is
/// full. Range is not checked.
pub fn board_object(
    scene: &mut Scene,
    services: &mut SimServices,
    target: ObjectId,
    source: ObjectId,
) -> bool {
    if source == target {
        return false;
    }
    let Some(source_object) = scene.object(source) else {
        return false;
    };
    let mass = source_object.human().map_or(0.0, |human| human.mass);

    let Some(aircraft) = scene.object_mut(target).and_then(|o| o.aircraft_mut()) else {
        return false;
    };
    if !aircraft.has_passenger_room() {
        return false;
    }
    aircraft.passengers += 1;
    aircraft.passengers_mass = aircraft.passengers_mass.max(0.0) + mass;

    services.mission.passengers_enter_notify(target, 1);
    delete_object(scene, services, source);
    debug!("{} boarded {}", source, target);
    true
}
