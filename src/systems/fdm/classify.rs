use crate::components::AirWorthyState;
use crate::utils::{BAD_ATTITUDE_MAX, BAD_ATTITUDE_MIN, MAX_SAFE_IMPACT_COEFF};

/// Why a touch down counted as a crash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrashCause {
    #[default]
    None,
    /// Hit the ground harder than the structure tolerates
    Impact,
    /// Pitch or bank too steep
    BadAttitude,
    /// Was already out of control
    OutOfControl,
    /// Landed in water without floats
    Water,
    /// Was already wrecked
    NotFlyable,
}

impl CrashCause {
    /// Numeric code used by mission logs
    pub fn code(self) -> i32 {
        match self {
            CrashCause::None => 0,
            CrashCause::Impact => 1,
            CrashCause::BadAttitude => 2,
            CrashCause::OutOfControl => 3,
            CrashCause::Water => 4,
            CrashCause::NotFlyable => 5,
        }
    }

    pub fn is_crash(self) -> bool {
        self != CrashCause::None
    }

    /// Aircraft that were already failing get no banner and no fireball
    pub fn suppresses_effects(self) -> bool {
        matches!(self, CrashCause::OutOfControl | CrashCause::NotFlyable)
    }

    /// Middle line of the crash banner
    pub fn banner_text(self, impact_coeff: f64) -> Option<String> {
        match self {
            CrashCause::Water => Some("*** SPLASH! ***".to_string()),
            CrashCause::BadAttitude => Some("*** ROTATION TOO STEEP! ***".to_string()),
            CrashCause::Impact => Some(format!(
                "*** IMPACTED {:.0}% OF TOLERANCE ***",
                impact_coeff * 100.0
            )),
            _ => None,
        }
    }
}

/// Everything touch down classification looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchDownState {
    pub air_worthy: AirWorthyState,
    pub impact_coeff: f64,
    pub over_water: bool,
    pub has_floats: bool,
    /// [rad]
    pub pitch: f64,
    pub bank: f64,
}

/// Angles between 45 and 315 degrees are too steep to land at
fn is_bad_attitude(angle: f64) -> bool {
    angle > BAD_ATTITUDE_MIN && angle < BAD_ATTITUDE_MAX
}

/// Classify a touch down, the first matching cause wins
pub fn classify_touch_down(state: &TouchDownState) -> CrashCause {
    if state.air_worthy == AirWorthyState::NotFlyable {
        CrashCause::NotFlyable
    } else if state.air_worthy == AirWorthyState::OutOfControl {
        CrashCause::OutOfControl
    } else if state.impact_coeff > MAX_SAFE_IMPACT_COEFF {
        CrashCause::Impact
    } else if state.over_water && !state.has_floats {
        CrashCause::Water
    } else if is_bad_attitude(state.pitch) || is_bad_attitude(state.bank) {
        CrashCause::BadAttitude
    } else {
        CrashCause::None
    }
}
