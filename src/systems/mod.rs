pub mod effects;
pub mod fdm;
pub mod objects;
pub mod rescue;

pub use effects::{delete_effects, SmokeCleanup};
pub use fdm::{airborne, object_collision, overspeed, parked, touch_down, CrashCause};
pub use objects::{create_object, delete_object, do_mortality, warp_object, warp_relative};
pub use rescue::{board_object, hoist_in, pick_up_human};
