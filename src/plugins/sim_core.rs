use bevy::prelude::*;

use super::events::{
    advance_clock, handle_collisions, handle_fdm_events, handle_rescue_commands,
    handle_warp_requests, mortality_system, FdmEvent, ObjectCollisionEvent, RescueCommand,
    WarpRequest,
};
use crate::resources::{CoreConfig, Scene, SimContext, SimServices};

/// Order of the simulation core within a frame
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SimCoreSet {
    Clock,
    Events,
    Mortality,
}

/// Runs the scene: clock, flight model callbacks, rescue commands, warps and
/// expiry of mortal objects.
///
/// A `SimServices` inserted before the plugin is kept, otherwise the null
/// collaborators are used.
#[derive(Default)]
pub struct SimCorePlugin {
    pub config: CoreConfig,
}

impl SimCorePlugin {
    pub fn new(config: CoreConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Scene::new(self.config.clone()))
            .init_resource::<SimContext>()
            .init_resource::<SimServices>();

        app.add_event::<FdmEvent>()
            .add_event::<ObjectCollisionEvent>()
            .add_event::<RescueCommand>()
            .add_event::<WarpRequest>();

        app.configure_sets(
            Update,
            (SimCoreSet::Clock, SimCoreSet::Events, SimCoreSet::Mortality).chain(),
        );

        app.add_systems(
            Update,
            (
                advance_clock.in_set(SimCoreSet::Clock),
                (
                    handle_warp_requests,
                    handle_fdm_events,
                    handle_collisions,
                    handle_rescue_commands,
                )
                    .chain()
                    .in_set(SimCoreSet::Events),
                mortality_system.in_set(SimCoreSet::Mortality),
            ),
        );

        info!("Simulation core ready");
    }
}
