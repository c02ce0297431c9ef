mod board;
mod hoist;

pub use board::board_object;
pub use hoist::{hoist_in, pick_up_human};
