//! Per-stroke homogeneous transform composition.

use crate::foundation::math::Mat4;
use crate::transform::euler::{EulerOpts, rotation_matrix};

/// Number of entries in a stroke's `shape_params`.
pub const SHAPE_PARAM_COUNT: usize = 9;

/// Extra rotation applied in world space after every stroke transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorldRotation {
    /// `(z, y, x)` angles.
    pub zyx: [f64; 3],
    /// Interpretation of `zyx`, independent of the per-stroke settings.
    #[serde(default)]
    pub euler: EulerOpts,
}

impl WorldRotation {
    /// The rotation as a homogeneous matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_mat3(rotation_matrix(self.zyx, self.euler))
    }
}

/// Options for [`compose_stroke_transform`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransformOpts {
    /// Interpretation of each stroke's rotation triple.
    pub euler: EulerOpts,
    /// Optional world-space rotation applied after translation.
    pub world_rotation: Option<WorldRotation>,
}

/// `Mt × Mr × Ms`: scale the unit sphere, rotate it, then move it into place.
pub fn compose_srt(
    scale: [f64; 3],
    rotation_zyx: [f64; 3],
    translation: [f64; 3],
    euler: EulerOpts,
) -> Mat4 {
    let ms = Mat4::scale(scale);
    let mr = Mat4::from_mat3(rotation_matrix(rotation_zyx, euler));
    let mt = Mat4::translation(translation);
    (mt * mr) * ms
}

/// Compose the `toWorld` matrix for one stroke's `shape_params`.
///
/// Layout is `scale[0..3]`, `rotation_zyx[3..6]`, `translation[6..9]`. Degenerate and
/// non-finite inputs are passed through unchanged.
pub fn compose_stroke_transform(
    shape_params: &[f64; SHAPE_PARAM_COUNT],
    opts: &TransformOpts,
) -> Mat4 {
    let [sx, sy, sz, rz, ry, rx, tx, ty, tz] = *shape_params;
    let m = compose_srt([sx, sy, sz], [rz, ry, rx], [tx, ty, tz], opts.euler);
    match &opts.world_rotation {
        Some(world) => world.matrix() * m,
        None => m,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/compose.rs"]
mod tests;
