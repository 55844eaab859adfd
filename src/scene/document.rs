use serde_json::Number;

use crate::foundation::error::StrokeResult;
use crate::foundation::math::Mat4;
use crate::scene::format::{format_matrix, format_rgb};
use crate::scene::sink::SceneSink;
use crate::scene::template::{CLOSING, SceneSettings, render_preamble, render_sphere};

/// Append-only scene document builder.
///
/// Shape entries are appended one at a time in stroke order; [`SceneDocument::render`] wraps
/// them in the fixed preamble and closing tag. Formatting is independent of accumulation, so
/// the same entries always render to the same bytes.
#[derive(Clone, Debug)]
pub struct SceneDocument {
    settings: SceneSettings,
    shapes: Vec<String>,
}

impl SceneDocument {
    /// Start an empty document.
    pub fn new(settings: SceneSettings) -> Self {
        Self {
            settings,
            shapes: Vec::new(),
        }
    }

    /// Append a diffuse sphere with the given `toWorld` matrix and reflectance.
    pub fn push_sphere(&mut self, to_world: &Mat4, rgb: &[Number; 3]) {
        self.shapes
            .push(render_sphere(&format_matrix(to_world), &format_rgb(rgb)));
    }

    /// Number of shape entries appended so far.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Render the complete document text.
    pub fn render(&self) -> String {
        let preamble = render_preamble(&self.settings);
        let body_len: usize = self.shapes.iter().map(String::len).sum();
        let mut out = String::with_capacity(preamble.len() + body_len + CLOSING.len());
        out.push_str(&preamble);
        for shape in &self.shapes {
            out.push_str(shape);
        }
        out.push_str(CLOSING);
        out
    }

    /// Render and hand the whole document to `sink` in one write.
    pub fn write_to(&self, sink: &mut dyn SceneSink) -> StrokeResult<()> {
        sink.write_document(&self.render())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
