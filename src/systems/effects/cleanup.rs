use crate::components::ObjectKind;
use crate::ecs::ObjectId;
use crate::resources::{Scene, SimServices};
use crate::systems::objects::delete_object;

/// What happens to smoke trails matched by [`delete_effects`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmokeCleanup {
    #[default]
    Delete,
    /// Stop respawning and let the visible puffs fade out
    StopRespawn,
}

/// Remove smoke, fire and explosions attached to `ref_object`.
///
/// With no reference object every attached effect in the scene matches.
/// Returns the number of objects deleted.
pub fn delete_effects(
    scene: &mut Scene,
    services: &mut SimServices,
    ref_object: Option<ObjectId>,
    smoke: SmokeCleanup,
) -> usize {
    let is_attached = |reference: Option<ObjectId>| match ref_object {
        Some(target) => reference == Some(target),
        None => reference.is_some(),
    };

    let mut doomed = Vec::new();
    for (id, object) in scene.objects.iter_mut() {
        if Some(id) == ref_object {
            continue;
        }
        let is_effect = matches!(
            object.kind(),
            ObjectKind::Smoke(_) | ObjectKind::Fire(_) | ObjectKind::Explosion(_)
        );
        if !is_effect || !is_attached(object.ref_object()) {
            continue;
        }

        match object.smoke_mut() {
            Some(trail) if smoke == SmokeCleanup::StopRespawn => {
                trail.stop_respawn();
                trail.delete_when_no_units = true;
            }
            _ => doomed.push(id),
        }
    }

    doomed
        .into_iter()
        .filter(|id| delete_object(scene, services, *id))
        .count()
}
