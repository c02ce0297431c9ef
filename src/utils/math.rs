use nalgebra::Vector3;
use std::f64::consts::{PI, TAU};

use super::constants::{METERS_PER_MILE, MPS_PER_MPH};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

#[inline]
pub fn mph_to_mps(mph: f64) -> f64 {
    mph * MPS_PER_MPH
}

#[inline]
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Wrap an angle into `[0, 2π)`
pub fn sanitize_radians(rad: f64) -> f64 {
    let wrapped = rad.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Signed shortest rotation from `from` to `to`, in `[-π, π]`
pub fn delta_radians(from: f64, to: f64) -> f64 {
    let theta = sanitize_radians(to) - sanitize_radians(from);
    if theta < -PI {
        theta + TAU
    } else if theta > PI {
        theta - TAU
    } else {
        theta
    }
}

/// Rotate about the z axis, clockwise for positive `theta`
pub fn rotate_heading(v: &Vector3<f64>, theta: f64) -> Vector3<f64> {
    let (s, c) = theta.sin_cos();
    Vector3::new(v.x * c + v.y * s, -v.x * s + v.y * c, v.z)
}

/// Rotate about the x axis
pub fn rotate_pitch(v: &Vector3<f64>, theta: f64) -> Vector3<f64> {
    let (s, c) = theta.sin_cos();
    Vector3::new(v.x, v.y * c + v.z * s, -v.y * s + v.z * c)
}

/// Rotate about the y axis
pub fn rotate_bank(v: &Vector3<f64>, theta: f64) -> Vector3<f64> {
    let (s, c) = theta.sin_cos();
    Vector3::new(v.x * c - v.z * s, v.y, v.x * s + v.z * c)
}
