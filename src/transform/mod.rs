//! Stroke transform composition (scale, zyx Euler rotation, translation).

pub(crate) mod compose;
pub(crate) mod euler;
