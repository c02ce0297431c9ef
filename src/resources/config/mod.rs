mod simulation;

pub use simulation::{CoreConfig, EffectTextures};
