use approx::assert_relative_eq;
use nalgebra::Vector3;
use sar_core::{components::Direction, ecs::ObjectId, resources::Scene};

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert that two directions are approximately equal
#[track_caller]
pub fn assert_direction_eq(actual: &Direction, expected: &Direction, epsilon: f64) {
    assert_relative_eq!(actual.heading, expected.heading, epsilon = epsilon);
    assert_relative_eq!(actual.pitch, expected.pitch, epsilon = epsilon);
    assert_relative_eq!(actual.bank, expected.bank, epsilon = epsilon);
}

/// Assert that nothing left in the scene refers to a deleted object
#[track_caller]
pub fn assert_no_references_to(scene: &Scene, id: ObjectId) {
    assert!(!scene.objects.is_alive(id), "{} is still alive", id);
    assert_ne!(scene.player, Some(id), "player still refers to {}", id);
    assert_ne!(scene.camera.target, Some(id), "camera still targets {}", id);
    assert!(!scene.ground_objects.contains(&id));
    assert!(!scene.humans_need_rescue.contains(&id));

    for (other, object) in scene.objects.iter() {
        assert_ne!(object.ref_object(), Some(id), "{} still refers to {}", other, id);
        if let Some(hoist) = object.aircraft().and_then(|a| a.hoist.as_ref()) {
            assert!(!hoist.occupants().contains(&id), "{} still carries {}", other, id);
        }
    }
}

/// Count live objects matching a predicate
pub fn count_objects(scene: &Scene, predicate: impl Fn(&sar_core::components::Object) -> bool) -> usize {
    scene.objects.iter().filter(|(_, object)| predicate(object)).count()
}
