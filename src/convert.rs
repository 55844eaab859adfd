use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{StrokeError, StrokeResult};
use crate::scene::document::SceneDocument;
use crate::scene::sink::{FileSink, SceneSink};
use crate::scene::template::SceneSettings;
use crate::strokes::model::{DEFAULT_COLLECTION_KEY, StrokeSet};
use crate::transform::compose::{TransformOpts, compose_stroke_transform};

/// Options controlling a stroke-to-scene conversion.
///
/// Every field has a default matching the reference stroke producer, so an empty JSON object
/// is a valid configuration file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConvertOpts {
    /// Top-level key holding the stroke collection.
    pub collection_key: String,
    /// Per-stroke transform options.
    pub transform: TransformOpts,
    /// Scene preamble settings.
    pub scene: SceneSettings,
}

impl Default for ConvertOpts {
    fn default() -> Self {
        Self {
            collection_key: DEFAULT_COLLECTION_KEY.to_string(),
            transform: TransformOpts::default(),
            scene: SceneSettings::default(),
        }
    }
}

impl ConvertOpts {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StrokeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StrokeError::config(format!("parse options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StrokeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StrokeError::config(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate option invariants.
    pub fn validate(&self) -> StrokeResult<()> {
        if self.collection_key.is_empty() {
            return Err(StrokeError::config("collection_key must be non-empty"));
        }
        self.scene.validate()
    }
}

/// Conversion statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Strokes read from the input.
    pub strokes: usize,
    /// Shape entries written to the scene.
    pub shapes: usize,
    /// Size of the written document in bytes.
    pub bytes: usize,
}

/// Build the scene document for `strokes`, one sphere per stroke in source order.
#[tracing::instrument(skip_all, fields(strokes = strokes.len()))]
pub fn convert(strokes: &StrokeSet, opts: &ConvertOpts) -> SceneDocument {
    let mut doc = SceneDocument::new(opts.scene.clone());
    for (id, record) in strokes.iter() {
        let to_world = compose_stroke_transform(&record.shape_params, &opts.transform);
        tracing::trace!(stroke = id, "append sphere");
        doc.push_sphere(&to_world, &record.color_params);
    }
    doc
}

/// Convert `strokes` and write the document to `sink` in a single write.
pub fn convert_to_sink(
    strokes: &StrokeSet,
    opts: &ConvertOpts,
    sink: &mut dyn SceneSink,
) -> StrokeResult<ConvertStats> {
    opts.validate()?;
    let doc = convert(strokes, opts);
    let text = doc.render();
    sink.write_document(&text)?;
    Ok(ConvertStats {
        strokes: strokes.len(),
        shapes: doc.shape_count(),
        bytes: text.len(),
    })
}

/// Load `input`, convert it and write the scene to `output`.
///
/// Input errors abort before the output file is touched.
#[tracing::instrument(skip_all)]
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    opts: &ConvertOpts,
) -> StrokeResult<ConvertStats> {
    let (input, output) = (input.as_ref(), output.as_ref());
    opts.validate()?;
    let strokes = StrokeSet::from_path_with_key(input, &opts.collection_key)?;
    let mut sink = FileSink::new(output);
    let stats = convert_to_sink(&strokes, opts, &mut sink)?;
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        strokes = stats.strokes,
        shapes = stats.shapes,
        bytes = stats.bytes,
        "converted strokes"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/convert.rs"]
mod tests;
