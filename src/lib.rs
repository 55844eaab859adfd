//! strokescene turns stroke parameter JSON into a Mitsuba 0.5 scene of diffuse spheres.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `stroke JSON -> StrokeSet` (records in source key order)
//! 2. **Compose**: `shape_params -> Mat4` per stroke, as `translate × rotate × scale`
//! 3. **Serialize**: `SceneDocument` collects one sphere entry per stroke and renders the full
//!    document (fixed preamble, entries, closing tag)
//! 4. **Write**: the rendered text goes to a [`SceneSink`] in a single write
//!
//! Conversion is single-threaded and deterministic: identical input and options always produce
//! byte-identical output. Every error is fatal for the run.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod convert;
mod foundation;
mod scene;
mod strokes;
mod transform;

pub use convert::{ConvertOpts, ConvertStats, convert, convert_file, convert_to_sink};
pub use foundation::error::{StrokeError, StrokeResult};
pub use foundation::math::{MAT3_IDENTITY, Mat3, Mat4, mul3};
pub use scene::document::SceneDocument;
pub use scene::format::{format_matrix, format_number, format_real, format_reals, format_rgb};
pub use scene::sink::{FileSink, InMemorySink, SceneSink, ensure_parent_dir};
pub use scene::template::SceneSettings;
pub use strokes::model::{COLOR_PARAM_COUNT, DEFAULT_COLLECTION_KEY, StrokeRecord, StrokeSet};
pub use transform::compose::{
    SHAPE_PARAM_COUNT, TransformOpts, WorldRotation, compose_srt, compose_stroke_transform,
};
pub use transform::euler::{
    AngleUnit, EulerConvention, EulerOpts, rot_x, rot_y, rot_z, rotation_matrix,
};
