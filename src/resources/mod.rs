pub mod config;
mod errors;
mod fdm;
mod scene;
mod services;
mod sound;
mod time;
mod visual_model;

pub use config::{CoreConfig, EffectTextures};
pub use errors::{ResourceError, Result};
pub use fdm::{FdmId, FdmModel, FdmRealm};
pub use scene::Scene;
pub use services::{
    GroundContact, GroundQuery, MissionLayer, NullGround, NullMission, NullSound, PlayRequest,
    SimServices, SoundPlayId, SoundServer,
};
pub use sound::{SoundSource, SoundSourceList};
pub use time::SimContext;
pub use visual_model::{
    LoadState, VisualModel, VisualModelHandle, VisualModelId, VisualModelOwner,
    VisualModelRegistry,
};
