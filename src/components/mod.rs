pub mod aircraft;
pub mod camera;
pub mod contact;
pub mod effects;
pub mod hoist;
pub mod human;
pub mod object;
pub mod parts;
pub mod scenery;
pub mod spatial;

pub use aircraft::{
    AirWorthyState, Aircraft, BrakesState, EngineSounds, EngineState, FlightModelType, Intercept,
    LandingGearState,
};
pub use camera::{CameraRef, CameraState};
pub use contact::{ContactBounds, ContactShape, CrashFlags, CrashType, RectangularBounds};
pub use effects::{
    CenterOffset, ColorEmission, Explosion, Fire, FrameAnimation, Smoke, SmokeType, SmokeUnit,
};
pub use hoist::{DeploymentMode, Hoist, HoistDeployments};
pub use human::{Human, HumanFlags, InterceptTarget};
pub use object::{Object, ObjectKind, ObjectType, StandardVisualModels};
pub use parts::{
    Color, ExternalFuelTank, ExternalFuelTankFlags, Light, LightFlags, ObjectPart, PartFlags,
    PartList, PartType, Rotor, RotorFlags,
};
pub use scenery::{
    ChemicalSpray, ChemicalType, FuelTank, FuelTankFlags, Ground, Heightfield, Helipad,
    HelipadFlags, HelipadStyle, Premodeled, PremodeledType, Runway, RunwayFlags, RunwaySurface,
};
pub use spatial::{Direction, Pose};
