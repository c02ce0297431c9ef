pub mod components;
pub mod ecs;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;
