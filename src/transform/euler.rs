//! zyx Euler angles to rotation matrices.
//!
//! Angles are always given in `(z, y, x)` order. The convention decides whether each rotation
//! is about the axes of the frame left by the previous rotation (intrinsic) or about the fixed
//! world axes (extrinsic).

use crate::foundation::math::{Mat3, mul3};

/// How the three zyx rotations are chained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EulerConvention {
    /// Rotate about z, then the rotated y, then the twice-rotated x: `Rz · Ry · Rx`.
    #[default]
    Intrinsic,
    /// Rotate about world z, then world y, then world x: `Rx · Ry · Rz`.
    Extrinsic,
}

/// Unit of the Euler angle triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    /// Radians.
    #[default]
    Radians,
    /// Degrees.
    Degrees,
}

impl AngleUnit {
    /// Convert `v` in this unit to radians.
    pub fn to_radians(self, v: f64) -> f64 {
        match self {
            AngleUnit::Radians => v,
            AngleUnit::Degrees => v.to_radians(),
        }
    }
}

/// Euler interpretation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EulerOpts {
    /// Chaining convention.
    pub convention: EulerConvention,
    /// Angle unit.
    pub unit: AngleUnit,
}

/// Rotation about the x axis by `a` radians.
pub fn rot_x(a: f64) -> Mat3 {
    let (s, c) = a.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]
}

/// Rotation about the y axis by `a` radians.
pub fn rot_y(a: f64) -> Mat3 {
    let (s, c) = a.sin_cos();
    [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]]
}

/// Rotation about the z axis by `a` radians.
pub fn rot_z(a: f64) -> Mat3 {
    let (s, c) = a.sin_cos();
    [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]
}

/// Rotation matrix for the `(z, y, x)` angle triple.
pub fn rotation_matrix(zyx: [f64; 3], opts: EulerOpts) -> Mat3 {
    let rz = rot_z(opts.unit.to_radians(zyx[0]));
    let ry = rot_y(opts.unit.to_radians(zyx[1]));
    let rx = rot_x(opts.unit.to_radians(zyx[2]));
    match opts.convention {
        EulerConvention::Intrinsic => mul3(&mul3(&rz, &ry), &rx),
        EulerConvention::Extrinsic => mul3(&mul3(&rx, &ry), &rz),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/euler.rs"]
mod tests;
