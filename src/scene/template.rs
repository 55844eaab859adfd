//! Fixed Mitsuba 0.5 scene boilerplate.
//!
//! The camera block is constant. Only the header attributes, sampler count and film
//! resolution are exposed as settings.

use crate::foundation::error::{StrokeError, StrokeResult};

/// Header and sensor settings for the scene preamble.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// `version` attribute of the `<scene>` root.
    pub version: String,
    /// Integrator plugin type.
    pub integrator: String,
    /// `ldsampler` sample count per pixel.
    pub sample_count: u32,
    /// Film width in pixels.
    pub width: u32,
    /// Film height in pixels.
    pub height: u32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            version: "0.5.0".to_string(),
            integrator: "path".to_string(),
            sample_count: 64,
            width: 1024,
            height: 1024,
        }
    }
}

impl SceneSettings {
    /// Validate settings that would otherwise produce an unrenderable scene.
    pub fn validate(&self) -> StrokeResult<()> {
        if self.version.trim().is_empty() {
            return Err(StrokeError::config("scene version must be non-empty"));
        }
        if self.integrator.trim().is_empty() {
            return Err(StrokeError::config("integrator type must be non-empty"));
        }
        if self.sample_count == 0 {
            return Err(StrokeError::config("sample_count must be > 0"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(StrokeError::config("film width and height must be > 0"));
        }
        Ok(())
    }
}

pub(crate) fn render_preamble(s: &SceneSettings) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>

<scene version="{version}">
    <integrator type="{integrator}" />

    <sensor type="perspective">
        <string name="fovAxis" value="smaller" />
        <float name="nearClip" value="0.01" />
        <float name="farClip" value="100" />
        <float name="focusDistance" value="1000" />
        <transform name="toWorld">
            <lookAt origin="0, 0, -10" target="0, 0, 0" up="0, 1, 0" />
        </transform>
        <float name="fov" value="39.3077" />

        <sampler type="ldsampler">
            <integer name="sampleCount" value="{sample_count}" />
        </sampler>

        <film type="hdrfilm">
            <integer name="width" value="{width}" />
            <integer name="height" value="{height}" />

            <rfilter type="gaussian" />
        </film>
    </sensor>
"#,
        version = s.version,
        integrator = s.integrator,
        sample_count = s.sample_count,
        width = s.width,
        height = s.height,
    )
}

pub(crate) fn render_sphere(matrix: &str, rgb: &str) -> String {
    format!(
        r#"
    <shape type="sphere">
        <transform name="toWorld">
            <matrix value="{matrix}"/>
        </transform>
        <bsdf type="diffuse">
            <srgb name="reflectance" value="{rgb}"/>
        </bsdf>
    </shape>
"#
    )
}

pub(crate) const CLOSING: &str = "\n</scene>\n";
