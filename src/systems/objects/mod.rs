mod lifecycle;
mod warp;

pub use lifecycle::{create_object, delete_all_objects, delete_object, do_mortality};
pub use warp::{is_slew, set_slew, warp_object, warp_relative};
