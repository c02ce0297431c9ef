use serde::{Deserialize, Serialize};

use super::object::Object;
use crate::utils::bit_flags;

bit_flags! {
    /// How other objects interact with this object's contact bounds
    pub struct CrashFlags {
        /// Can crash into other objects
        const CRASH_OTHER = 1 << 0;
        /// Other objects can crash into this one
        const CRASH_CAUSE = 1 << 1;
        /// Landable and walkable
        const SUPPORT_SURFACE = 1 << 2;
    }
}

/// What a crash into this object counts as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrashType {
    #[default]
    Obstruction,
    Ground,
    Mountain,
    Building,
    Aircraft,
    Fire,
}

impl CrashType {
    pub fn banner_text(self) -> &'static str {
        match self {
            CrashType::Obstruction => "*** OBSTRUCTION ***",
            CrashType::Ground => "*** GROUND ***",
            CrashType::Mountain => "*** MOUNTAIN ***",
            CrashType::Building => "*** BUILDING ***",
            CrashType::Aircraft => "*** AIRCRAFT ***",
            CrashType::Fire => "*** FIRE ***",
        }
    }
}

/// Axis aligned box in object space, rotated by the owner's heading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectangularBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
    /// cos(-heading)
    pub cos_heading: f64,
    /// sin(-heading)
    pub sin_heading: f64,
}

impl RectangularBounds {
    pub fn update_heading(&mut self, heading: f64) {
        let (s, c) = (-heading).sin_cos();
        self.sin_heading = s;
        self.cos_heading = c;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ContactShape {
    Spherical {
        radius: f64,
    },
    Cylindrical {
        radius: f64,
        height_min: f64,
        height_max: f64,
    },
    Rectangular(RectangularBounds),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactBounds {
    pub crash_flags: CrashFlags,
    pub crash_type: CrashType,
    pub shape: ContactShape,
}

impl ContactBounds {
    /// Radius on the xy plane [m]
    pub fn flat_radius(&self) -> f64 {
        match &self.shape {
            ContactShape::Spherical { radius } | ContactShape::Cylindrical { radius, .. } => {
                *radius
            }
            ContactShape::Rectangular(rect) => {
                let half_x = (rect.x_max - rect.x_min) / 2.0;
                let half_y = (rect.y_max - rect.y_min) / 2.0;
                half_x.max(half_y)
            }
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

impl Object {
    fn set_contact(&mut self, crash_flags: CrashFlags, crash_type: CrashType, shape: ContactShape) {
        self.contact_bounds = Some(ContactBounds {
            crash_flags,
            crash_type,
            shape,
        });
    }

    pub fn add_contact_spherical(
        &mut self,
        crash_flags: CrashFlags,
        crash_type: CrashType,
        radius: f64,
    ) {
        self.set_contact(
            crash_flags,
            crash_type,
            ContactShape::Spherical {
                radius: radius.max(0.0),
            },
        );
    }

    pub fn add_contact_cylindrical(
        &mut self,
        crash_flags: CrashFlags,
        crash_type: CrashType,
        radius: f64,
        height_min: f64,
        height_max: f64,
    ) {
        let (height_min, height_max) = ordered(height_min, height_max);
        self.set_contact(
            crash_flags,
            crash_type,
            ContactShape::Cylindrical {
                radius: radius.max(0.0),
                height_min,
                height_max,
            },
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_contact_rectangular(
        &mut self,
        crash_flags: CrashFlags,
        crash_type: CrashType,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
        z_min: f64,
        z_max: f64,
    ) {
        let (x_min, x_max) = ordered(x_min, x_max);
        let (y_min, y_max) = ordered(y_min, y_max);
        let (z_min, z_max) = ordered(z_min, z_max);
        let mut rect = RectangularBounds {
            x_min,
            x_max,
            y_min,
            y_max,
            z_min,
            z_max,
            ..Default::default()
        };
        rect.update_heading(self.direction.heading);
        self.set_contact(crash_flags, crash_type, ContactShape::Rectangular(rect));
    }

    /// Contact radius on the xy plane, 0 without contact bounds [m]
    pub fn flat_contact_radius(&self) -> f64 {
        self.contact_bounds
            .as_ref()
            .map_or(0.0, ContactBounds::flat_radius)
    }

    /// Strip crash flags from the contact bounds, if any
    pub fn clear_crash_flags(&mut self, flags: CrashFlags) {
        if let Some(bounds) = self.contact_bounds.as_mut() {
            bounds.crash_flags.remove(flags);
        }
    }

    /// Crash type to report when something hits this object
    pub fn crash_type(&self) -> CrashType {
        self.contact_bounds
            .as_ref()
            .map_or(CrashType::Obstruction, |bounds| bounds.crash_type)
    }
}
