mod cleanup;
mod spawn;

pub use cleanup::{delete_effects, SmokeCleanup};
pub use spawn::{explosion_create, smoke_create, smoke_create_sparks, splash_create, SmokeParams};
