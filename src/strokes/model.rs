use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::foundation::error::{StrokeError, StrokeResult};
use crate::transform::compose::SHAPE_PARAM_COUNT;

/// Top-level key holding the stroke collection in producer output.
pub const DEFAULT_COLLECTION_KEY: &str = "stroke_params";

/// Number of entries in a stroke's `color_params`.
pub const COLOR_PARAM_COUNT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
/// One stroke: a sphere placed, shaped and colored in the scene.
pub struct StrokeRecord {
    /// `scale[3]`, `rotation_zyx[3]`, `translation[3]`.
    pub shape_params: [f64; SHAPE_PARAM_COUNT],
    /// RGB reflectance, kept as the source numbers so integers and floats are emitted verbatim.
    pub color_params: [Number; COLOR_PARAM_COUNT],
    /// Volumetric density parameters. Loaded and carried, not used for scene output.
    pub density_params: Vec<f64>,
}

/// Stroke records in source order.
///
/// Order follows the key order of the collection object in the source document and decides
/// the order of shape entries in the output scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StrokeSet {
    records: Vec<(String, StrokeRecord)>,
}

impl StrokeSet {
    /// Build a set from already-ordered records.
    pub fn from_records(records: Vec<(String, StrokeRecord)>) -> Self {
        Self { records }
    }

    /// Parse strokes from a JSON string using [`DEFAULT_COLLECTION_KEY`].
    pub fn from_json_str(s: &str) -> StrokeResult<Self> {
        Self::from_json_str_with_key(s, DEFAULT_COLLECTION_KEY)
    }

    /// Parse strokes from a JSON string, reading the collection under `collection_key`.
    pub fn from_json_str_with_key(s: &str, collection_key: &str) -> StrokeResult<Self> {
        let root: Value = serde_json::from_str(s)
            .map_err(|e| StrokeError::malformed_input(format!("parse stroke JSON: {e}")))?;
        Self::from_value(root, collection_key)
    }

    /// Parse strokes from a JSON reader, reading the collection under `collection_key`.
    pub fn from_reader<R: std::io::Read>(r: R, collection_key: &str) -> StrokeResult<Self> {
        let root: Value = serde_json::from_reader(r)
            .map_err(|e| StrokeError::malformed_input(format!("parse stroke JSON: {e}")))?;
        Self::from_value(root, collection_key)
    }

    /// Load strokes from a JSON file using [`DEFAULT_COLLECTION_KEY`].
    pub fn from_path(path: impl AsRef<Path>) -> StrokeResult<Self> {
        Self::from_path_with_key(path, DEFAULT_COLLECTION_KEY)
    }

    /// Load strokes from a JSON file, reading the collection under `collection_key`.
    #[tracing::instrument(skip(path))]
    pub fn from_path_with_key(
        path: impl AsRef<Path>,
        collection_key: &str,
    ) -> StrokeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StrokeError::malformed_input(format!("open stroke JSON '{}': {e}", path.display()))
        })?;
        let set = Self::from_reader(BufReader::new(f), collection_key)?;
        tracing::debug!(path = %path.display(), strokes = set.len(), "loaded stroke set");
        Ok(set)
    }

    fn from_value(root: Value, collection_key: &str) -> StrokeResult<Self> {
        let Value::Object(mut root) = root else {
            return Err(StrokeError::malformed_input(
                "stroke JSON root must be an object",
            ));
        };
        let collection = match root.remove(collection_key) {
            Some(Value::Object(m)) => m,
            Some(_) => {
                return Err(StrokeError::malformed_input(format!(
                    "'{collection_key}' must be an object keyed by stroke id"
                )));
            }
            None => {
                return Err(StrokeError::malformed_input(format!(
                    "missing stroke collection '{collection_key}'"
                )));
            }
        };

        let mut records = Vec::with_capacity(collection.len());
        for (id, value) in collection {
            let Value::Object(fields) = value else {
                return Err(StrokeError::malformed_input(format!(
                    "stroke '{id}' must be an object"
                )));
            };
            let shape = reals(&fields, &id, "shape_params")?;
            let color = numbers(&fields, &id, "color_params")?;
            let record = StrokeRecord {
                shape_params: fixed(shape, &id, "shape_params")?,
                color_params: fixed(color, &id, "color_params")?,
                density_params: reals(&fields, &id, "density_params")?,
            };
            records.push((id, record));
        }
        Ok(Self { records })
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the collection holds no strokes.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate `(id, record)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StrokeRecord)> {
        self.records.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Look up a stroke by id.
    pub fn get(&self, id: &str) -> Option<&StrokeRecord> {
        self.records
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, r)| r)
    }
}

fn numbers(fields: &Map<String, Value>, id: &str, name: &str) -> StrokeResult<Vec<Number>> {
    let Some(value) = fields.get(name) else {
        return Err(StrokeError::missing_field(format!(
            "stroke '{id}' has no '{name}'"
        )));
    };
    let Value::Array(items) = value else {
        return Err(StrokeError::missing_field(format!(
            "stroke '{id}' field '{name}' must be a list of numbers"
        )));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::Number(n) => Ok(n.clone()),
            _ => Err(StrokeError::missing_field(format!(
                "stroke '{id}' field '{name}'[{i}] is not a number"
            ))),
        })
        .collect()
}

fn reals(fields: &Map<String, Value>, id: &str, name: &str) -> StrokeResult<Vec<f64>> {
    numbers(fields, id, name)?
        .iter()
        .enumerate()
        .map(|(i, n)| {
            n.as_f64().ok_or_else(|| {
                StrokeError::missing_field(format!(
                    "stroke '{id}' field '{name}'[{i}] is not representable as f64"
                ))
            })
        })
        .collect()
}

fn fixed<T, const N: usize>(v: Vec<T>, id: &str, name: &str) -> StrokeResult<[T; N]> {
    let len = v.len();
    v.try_into().map_err(|_| {
        StrokeError::missing_field(format!(
            "stroke '{id}' field '{name}' has {len} values, expected {N}"
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/strokes/model.rs"]
mod tests;
