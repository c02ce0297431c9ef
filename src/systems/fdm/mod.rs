mod bridge;
mod classify;
mod crash;
mod events;
mod touch_down;

pub use bridge::{
    create_fdm_model, destroy_fdm_model, init_fdm_model, match_object_from_fdm, match_object_to_fdm,
};
pub use classify::{classify_touch_down, CrashCause, TouchDownState};
pub use crash::set_aircraft_crashed;
pub use events::{airborne, object_collision, overspeed, parked};
pub use touch_down::{landing_effect, touch_down, LandingEffect};
