pub mod entity;
pub mod error;

pub use entity::{ObjectId, ObjectStore};
pub use error::{EcsError, Result};
