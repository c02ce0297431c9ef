mod events;
mod sim_core;

pub use events::{
    advance_clock, handle_collisions, handle_fdm_events, handle_rescue_commands,
    handle_warp_requests, mortality_system, FdmEvent, ObjectCollisionEvent, RescueCommand,
    WarpRequest,
};
pub use sim_core::{SimCorePlugin, SimCoreSet};
