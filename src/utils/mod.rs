pub mod constants;
mod flags;
pub mod math;

pub(crate) use flags::bit_flags;

pub use constants::*;
pub use math::*;
