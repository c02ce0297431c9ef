use std::f64::consts::PI;

pub const METERS_PER_MILE: f64 = 1609.344; // m/mi
pub const MPS_PER_MPH: f64 = 0.44704; // (m/s)/mph

pub const DEFAULT_TEMPERATURE: f64 = 0.6; // IR coefficient [0, 1]

// Crash effects
pub const CRASH_EFFECT_RADIUS_COEFF: f64 = 1.8; // x flat contact radius
pub const MIN_CRASH_EFFECT_RADIUS: f64 = 10.0; // m
pub const ASSUMED_FUEL_REMAINING: f64 = 10.0; // kg, objects without fuel state
pub const CRASHED_BANK: f64 = 1.7 * PI; // rad

// Tower camera placement after a collision
pub const TOWER_OFFSET_COEFF: f64 = 4.0; // x flat contact radius
pub const MIN_TOWER_OFFSET: f64 = 10.0; // m
pub const DEFAULT_TOWER_OFFSET: f64 = 50.0; // m

// Landing thresholds
pub const SKID_SPEED_MPH: f64 = 5.0; // mph
pub const WHEEL_SKID_BRAKED_MPH: f64 = 10.0; // mph
pub const WHEEL_SKID_ROLLING_MPH: f64 = 25.0; // mph
pub const MAX_SAFE_IMPACT_COEFF: f64 = 1.0;

// Attitude window used by touch down, pitch and bank are checked separately
pub const BAD_ATTITUDE_MIN: f64 = 0.25 * PI; // rad
pub const BAD_ATTITUDE_MAX: f64 = 1.75 * PI; // rad

pub const OVERSPEED_HIT_POINTS_COEFF: f64 = 0.1; // fraction of max hit points

pub const HOIST_MAX_OCCUPANTS: usize = 1;
