use bevy::log::{debug, warn};

use crate::components::{Object, ObjectKind, ObjectType, PartList};
use crate::ecs::{EcsError, ObjectId, Result};
use crate::resources::{FdmId, Scene, SimContext, SimServices, SoundServer, VisualModelOwner};
use crate::systems::fdm::destroy_fdm_model;

/// Create an empty object of the given type.
///
/// The lowest free slot is reused before the store grows. Ground objects are
/// also registered in the scene's ground list.
///
/// # Arguments
/// - `scene`: Scene the object is added to.
/// - `ctx`: Current simulation time, stamped as the birth time.
/// - `object_type`: Any type except garbage.
pub fn create_object(scene: &mut Scene, ctx: &SimContext, object_type: ObjectType) -> Result<ObjectId> {
    let Some(kind) = ObjectKind::from_type(object_type) else {
        warn!("Refusing to create an object of type {:?}", object_type);
        return Err(EcsError::InvalidType(object_type));
    };

    let mut object = Object::new(kind);
    object.temperature = scene.config.default_temperature;
    object.birth_time_ms = ctx.now_ms();
    object.birth_time_sec = ctx.now_sec();

    let id = scene.objects.insert(object);
    if object_type == ObjectType::Ground && !scene.ground_objects.contains(&id) {
        scene.ground_objects.push(id);
    }

    debug!("Created {} of type {:?}", id, object_type);
    Ok(id)
}

/// Release what a payload owns outside the visual model registry
fn release_payload(object: &mut Object, sound: &mut dyn SoundServer) -> Option<FdmId> {
    let mut fdm = None;
    if let Some(aircraft) = object.aircraft_mut() {
        aircraft.sounds.stop_all(sound);
        aircraft.hoist = None;
        aircraft.intercepts.clear();
        fdm = aircraft.fdm.take();
    } else if let Some(human) = object.human_mut() {
        human.enter_message = None;
    } else if let Some(smoke) = object.smoke_mut() {
        smoke.units.clear();
    } else if let Some(spray) = object.chemical_spray_mut() {
        spray.owner = None;
    }
    fdm
}

/// Delete an object and everything it owns.
///
/// Afterwards no live object or scene field refers to `id`. Returns false
/// for stale handles.
pub fn delete_object(scene: &mut Scene, services: &mut SimServices, id: ObjectId) -> bool {
    let Some(object) = scene.objects.get_mut(id) else {
        return false;
    };

    let fdm = release_payload(object, services.sound.as_mut());
    object.release_visual_models(&mut scene.visual_models);
    object.contact_bounds = None;
    object.lights = PartList::new();
    object.sound_sources.clear();
    object.name = None;

    if let Some(fdm) = fdm {
        destroy_fdm_model(scene, fdm);
    }

    scene.objects.remove(id);
    for (_, other) in scene.objects.iter_mut() {
        other.clear_references_to(id);
    }
    scene.forget(id);

    debug!("Deleted {}", id);
    true
}

/// Delete every object in the scene
pub fn delete_all_objects(scene: &mut Scene, services: &mut SimServices) {
    for id in scene.objects.ids() {
        delete_object(scene, services, id);
    }
    scene.ground_objects.clear();
    scene.humans_need_rescue.clear();
    scene.player = None;
}

/// Delete every object whose life span has passed, returning how many went
pub fn do_mortality(scene: &mut Scene, services: &mut SimServices, ctx: &SimContext) -> usize {
    let now = ctx.now_ms();
    let expired: Vec<ObjectId> = scene
        .objects
        .iter()
        .filter(|(_, object)| object.is_expired(now))
        .map(|(id, _)| id)
        .collect();

    expired
        .into_iter()
        .filter(|id| delete_object(scene, services, *id))
        .count()
}
