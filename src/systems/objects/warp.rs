use nalgebra::Vector3;

use crate::components::{Direction, FlightModelType};
use crate::ecs::ObjectId;
use crate::resources::Scene;

/// Move an object, updating only the supplied parts of its pose.
///
/// The object's flight dynamics model follows, and heading dependent trig is
/// recomputed when a direction is given.
pub fn warp_object(
    scene: &mut Scene,
    id: ObjectId,
    position: Option<Vector3<f64>>,
    direction: Option<Direction>,
) {
    let Some(object) = scene.objects.get_mut(id) else {
        return;
    };

    if let Some(position) = position {
        object.position = position;
    }
    if let Some(direction) = direction {
        object.direction = direction;
    }

    if let Some(model) = object.fdm().and_then(|fdm| scene.fdm.get_mut(fdm)) {
        if let Some(position) = position {
            model.position = position;
        }
        if let Some(direction) = direction {
            model.direction = direction;
        }
    }

    if direction.is_some() {
        object.update_heading_trig();
    }
}

/// Move an object relative to `reference`.
///
/// The position offset is expressed in the reference's frame. Without a
/// direction offset the reference's direction is copied. Does nothing when
/// the reference is gone.
pub fn warp_relative(
    scene: &mut Scene,
    id: ObjectId,
    reference: ObjectId,
    offset_position: Option<Vector3<f64>>,
    offset_direction: Option<Direction>,
) {
    let Some(reference) = scene.object(reference) else {
        return;
    };

    let position = match offset_position {
        Some(offset) => reference.position + reference.direction.rotate_to_world(&offset),
        None => reference.position,
    };
    let direction = match offset_direction {
        Some(offset) => reference.direction.compose(&offset),
        None => reference.direction,
    };

    warp_object(scene, id, Some(position), Some(direction));
}

pub fn is_slew(scene: &Scene, id: ObjectId) -> bool {
    scene
        .object(id)
        .and_then(|object| object.aircraft())
        .is_some_and(|aircraft| aircraft.is_slew())
}

/// Enter or leave slew mode, restoring the previous flight model on exit.
///
/// Returns false when the object is not an aircraft.
pub fn set_slew(scene: &mut Scene, id: ObjectId, enable: bool) -> bool {
    let Some(aircraft) = scene.object_mut(id).and_then(|object| object.aircraft_mut()) else {
        return false;
    };

    if enable && !aircraft.is_slew() {
        aircraft.last_flight_model_type = aircraft.flight_model_type;
        aircraft.flight_model_type = FlightModelType::Slew;
    } else if !enable && aircraft.is_slew() {
        aircraft.flight_model_type = aircraft.last_flight_model_type;
    }
    true
}
