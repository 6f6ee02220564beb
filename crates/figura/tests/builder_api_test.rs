//! Integration tests for the DiagramBuilder API

use figura::{
    DiagramBuilder,
    config::{AppConfig, ExportConfig, RenderConfig, StyleConfig},
    diagnostics::ErrorCode,
    draw::DrawCommand,
    geometry::Point,
    record::{Record, Value},
    viewport::Viewport,
};

const MIXED: &str = r#"
    Sketch of a ray, a box and a typo.
    {"primitive": "ray", "x1": 50, "y1": 50, "x2": 60, "y2": 50}
    {primitive: "Rectangle", xmin: 10, ymin: 10, xmax: 40, ymax: 30, fill_color: "LightBlue"}
    {"primitive": "segment", "x1": 10, "y1": 10, "x2": 10, "y2": 10}
    {"primitive": "circle", "x": 50, "y": 50, "radius": 5, "shadow": true}
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_compile_mixed_document() {
    let builder = DiagramBuilder::default();
    let compilation = builder
        .compile(MIXED, Viewport::default())
        .expect("Failed to compile");

    let names: Vec<_> = compilation
        .diagram()
        .commands()
        .iter()
        .map(DrawCommand::name)
        .collect();
    assert_eq!(names, ["line", "rectangle", "circle"]);

    let codes: Vec<_> = compilation
        .diagnostics()
        .iter()
        .filter_map(|diagnostic| diagnostic.code())
        .collect();
    assert_eq!(codes, [ErrorCode::E105, ErrorCode::E104]);
    assert!(compilation.has_errors());
}

#[test]
fn test_ray_reaches_past_viewport() {
    let builder = DiagramBuilder::default();
    let source = r#"{"primitive": "ray", "x1": 50, "y1": 50, "x2": 60, "y2": 50}"#;
    let compilation = builder.compile(source, Viewport::default()).unwrap();

    let DrawCommand::Line { from, to, .. } = &compilation.diagram().commands()[0] else {
        panic!("ray should render as a line");
    };
    assert_eq!(*from, Point::new(50.0, 50.0));
    assert!(to.x() >= 100.0);
    assert_eq!(to.y(), 50.0);
}

#[test]
fn test_compile_record_list() {
    let record: Record = [
        ("primitive", Value::from("arrow")),
        ("x1", Value::from(10)),
        ("y1", Value::from(10)),
        ("x2", Value::from(90)),
        ("y2", Value::from(90)),
    ]
    .into_iter()
    .collect();

    let builder = DiagramBuilder::default();
    let compilation = builder
        .compile(vec![record], Viewport::default())
        .unwrap();
    let DrawCommand::Line { marker_end, .. } = &compilation.diagram().commands()[0] else {
        panic!("arrow should render as a line");
    };
    assert!(marker_end.is_some());
}

#[test]
fn test_compile_is_deterministic() {
    let builder = DiagramBuilder::default();
    let first = builder.compile(MIXED, Viewport::default()).unwrap();
    let second = builder.compile(MIXED, Viewport::default()).unwrap();
    assert_eq!(first.diagram(), second.diagram());
    assert_eq!(
        builder.render_svg(first.diagram()).unwrap(),
        builder.render_svg(second.diagram()).unwrap()
    );
}

#[test]
fn test_render_svg() {
    let builder = DiagramBuilder::default();
    let compilation = builder.compile(MIXED, Viewport::default()).unwrap();
    let svg = builder.render_svg(compilation.diagram()).unwrap();

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(r#"viewBox="0 0 100 100""#));
    assert!(svg.contains(r##"fill="#add8e6""##), "fill color is canonicalized");
}

#[test]
fn test_strict_compilation() {
    let builder = DiagramBuilder::default();
    let err = builder
        .compile(MIXED, Viewport::default())
        .unwrap()
        .into_strict()
        .unwrap_err();
    assert_eq!(err.error_count(), 1);

    let clean = r#"{"primitive": "point", "x": 1, "y": 2}"#;
    let diagram = builder
        .compile(clean, Viewport::default())
        .unwrap()
        .into_strict()
        .unwrap();
    assert_eq!(diagram.len(), 1);
}

#[test]
fn test_viewport_is_a_view_transform() {
    let builder = DiagramBuilder::default();
    let full = builder.compile(MIXED, Viewport::default()).unwrap();
    let cropped = builder
        .compile(MIXED, Viewport::new(0.0, 0.0, 50.0, 50.0).unwrap())
        .unwrap();

    assert_eq!(full.diagram().commands(), cropped.diagram().commands());
    let svg = builder.render_svg(cropped.diagram()).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 50 50""#));

    let recropped = full
        .into_diagram()
        .with_viewport(Viewport::new(0.0, 0.0, 50.0, 50.0).unwrap());
    assert_eq!(&recropped, cropped.diagram());
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        RenderConfig::new(2.0, 1.5),
        StyleConfig::new(Some("black".to_string())),
        ExportConfig::default(),
    );
    let builder = DiagramBuilder::new(config);
    let compilation = builder
        .compile(r#"{"primitive": "point", "x": 5, "y": 5}"#, Viewport::default())
        .unwrap();

    let DrawCommand::Circle { radius, .. } = &compilation.diagram().commands()[0] else {
        panic!("point should render as a circle");
    };
    assert_eq!(*radius, 1.5);
}

#[test]
fn test_invalid_render_config() {
    let config = AppConfig::new(
        RenderConfig::new(-1.0, 0.7),
        StyleConfig::default(),
        ExportConfig::default(),
    );
    let builder = DiagramBuilder::new(config);
    assert!(builder.compile("", Viewport::default()).is_err());
}

#[test]
fn test_empty_source() {
    let builder = DiagramBuilder::default();
    let compilation = builder.compile("no records here", Viewport::default()).unwrap();
    assert!(compilation.diagram().is_empty());
    assert!(compilation.diagnostics().is_empty());
}
