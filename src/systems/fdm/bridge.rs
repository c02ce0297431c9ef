use bevy::log::debug;

use crate::ecs::ObjectId;
use crate::resources::{FdmId, FdmModel, Scene};

/// Forced on every model the flight dynamics library creates
pub fn init_fdm_model(model: &mut FdmModel) {
    model.landed_state = true;
    model.stopped = true;
}

/// Create a flight dynamics model mirroring an aircraft's pose.
///
/// An existing model of the aircraft is destroyed first. Returns `None` for
/// stale handles and objects that are not aircraft.
pub fn create_fdm_model(scene: &mut Scene, id: ObjectId) -> Option<FdmId> {
    let old = scene.object(id)?.aircraft()?.fdm;
    if let Some(old) = old {
        destroy_fdm_model(scene, old);
    }

    let object = scene.objects.get_mut(id)?;
    let velocity = object.aircraft()?.velocity;
    let mut model = FdmModel {
        position: object.position,
        direction: object.direction,
        velocity,
        ..Default::default()
    };
    init_fdm_model(&mut model);

    let fdm = scene.fdm.insert(model);
    if let Some(aircraft) = object.aircraft_mut() {
        aircraft.fdm = Some(fdm);
    }
    debug!("Created flight model {:?} for {}", fdm, id);
    Some(fdm)
}

/// Destroy a model and clear every aircraft reference to it
pub fn destroy_fdm_model(scene: &mut Scene, fdm: FdmId) {
    scene.fdm.remove(fdm);
    for (_, object) in scene.objects.iter_mut() {
        if let Some(aircraft) = object.aircraft_mut() {
            if aircraft.fdm == Some(fdm) {
                aircraft.fdm = None;
            }
        }
    }
}

/// Object owning a flight dynamics model
pub fn match_object_from_fdm(scene: &Scene, fdm: FdmId) -> Option<ObjectId> {
    scene
        .objects
        .iter()
        .find(|(_, object)| object.fdm() == Some(fdm))
        .map(|(id, _)| id)
}

/// Copy the model's pose into its object, and velocity for aircraft
pub fn match_object_to_fdm(scene: &mut Scene, id: ObjectId) {
    let Some(object) = scene.objects.get_mut(id) else {
        return;
    };
    let Some(model) = object.fdm().and_then(|fdm| scene.fdm.get(fdm)) else {
        return;
    };

    object.position = model.position;
    object.direction = model.direction;
    let velocity = model.velocity;
    if let Some(aircraft) = object.aircraft_mut() {
        aircraft.velocity = velocity;
    }
    object.update_heading_trig();
}
