//! Stroke record model and JSON loader.

pub(crate) mod model;
