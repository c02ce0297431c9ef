#[path = "../common/mod.rs"]
mod common;

mod fdm;
mod lifecycle;
mod plugin;
