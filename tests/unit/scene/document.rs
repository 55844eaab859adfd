use super::*;
use crate::scene::sink::InMemorySink;

fn rgb(c: [f64; 3]) -> [Number; 3] {
    c.map(|v| Number::from_f64(v).unwrap())
}

const EMPTY_SCENE: &str = r#"<?xml version="1.0" encoding="utf-8"?>

<scene version="0.5.0">
    <integrator type="path" />

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
            <integer name="sampleCount" value="64" />
        </sampler>

        <film type="hdrfilm">
            <integer name="width" value="1024" />
            <integer name="height" value="1024" />

            <rfilter type="gaussian" />
        </film>
    </sensor>

</scene>
"#;

#[test]
fn empty_document_is_preamble_and_closing_tag() {
    let doc = SceneDocument::new(SceneSettings::default());
    assert_eq!(doc.shape_count(), 0);
    assert_eq!(doc.render(), EMPTY_SCENE);
}

#[test]
fn sphere_entry_layout() {
    let mut doc = SceneDocument::new(SceneSettings::default());
    doc.push_sphere(&Mat4::IDENTITY, &rgb([0.1, 0.2, 0.3]));
    let text = doc.render();

    let expected_entry = r#"
    <shape type="sphere">
        <transform name="toWorld">
            <matrix value="1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0"/>
        </transform>
        <bsdf type="diffuse">
            <srgb name="reflectance" value="0.1, 0.2, 0.3"/>
        </bsdf>
    </shape>
"#;
    assert!(text.contains(expected_entry), "{text}");
    assert!(text.ends_with("    </shape>\n\n</scene>\n"));
    assert_eq!(doc.shape_count(), 1);
}

#[test]
fn entries_render_in_append_order() {
    let mut doc = SceneDocument::new(SceneSettings::default());
    doc.push_sphere(&Mat4::IDENTITY, &rgb([1.0, 0.0, 0.0]));
    doc.push_sphere(&Mat4::IDENTITY, &rgb([0.0, 1.0, 0.0]));
    doc.push_sphere(&Mat4::IDENTITY, &[0.into(), 0.into(), 1.into()]);
    let text = doc.render();
    let r = text.find("\"1.0, 0.0, 0.0\"").unwrap();
    let g = text.find("\"0.0, 1.0, 0.0\"").unwrap();
    let b = text.find("\"0, 0, 1\"").unwrap();
    assert!(r < g && g < b);
    assert_eq!(text.matches("<shape type=\"sphere\">").count(), 3);
}

#[test]
fn settings_flow_into_preamble() {
    let settings = SceneSettings {
        sample_count: 256,
        width: 640,
        height: 480,
        ..SceneSettings::default()
    };
    let text = SceneDocument::new(settings).render();
    assert!(text.contains(r#"<integer name="sampleCount" value="256" />"#));
    assert!(text.contains(r#"<integer name="width" value="640" />"#));
    assert!(text.contains(r#"<integer name="height" value="480" />"#));
}

#[test]
fn settings_validation_rejects_zero_sizes() {
    assert!(SceneSettings::default().validate().is_ok());
    let bad = SceneSettings {
        sample_count: 0,
        ..SceneSettings::default()
    };
    assert!(bad.validate().is_err());
    let bad = SceneSettings {
        width: 0,
        ..SceneSettings::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn write_to_hands_full_text_to_sink() {
    let mut doc = SceneDocument::new(SceneSettings::default());
    doc.push_sphere(&Mat4::IDENTITY, &rgb([0.5, 0.5, 0.5]));
    let mut sink = InMemorySink::new();
    doc.write_to(&mut sink).unwrap();
    assert_eq!(sink.text(), Some(doc.render().as_str()));
}
