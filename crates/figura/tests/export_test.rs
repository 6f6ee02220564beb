//! Integration tests for exporting diagrams to files

use figura::{DiagramBuilder, FiguraError, export::ExportFormat, viewport::Viewport};

const SOURCE: &str = r#"
    {"primitive": "double_arrow", "x1": 10, "y1": 50, "x2": 90, "y2": 50, "color": "red"}
    {"primitive": "triangle", "x1": 20, "y1": 80, "x2": 50, "y2": 20, "x3": 80, "y3": 80, "rotation": 90}
"#;

#[test]
fn test_export_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.svg");

    let builder = DiagramBuilder::default();
    let compilation = builder
        .export(SOURCE, "svg", &path, Viewport::default())
        .expect("Failed to export");
    assert_eq!(compilation.diagram().len(), 3);

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("<polygon"));
    assert_eq!(svg.matches("marker-end=").count(), 2);
    assert!(svg.contains(r#"transform="rotate(90 50 60)""#));
}

#[test]
fn test_export_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.png");

    let builder = DiagramBuilder::default();
    builder
        .export(SOURCE, "PNG", &path, Viewport::new(0.0, 0.0, 50.0, 25.0).unwrap())
        .expect("Failed to export");

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");

    // IHDR width and height, big-endian, at a fixed offset.
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    assert_eq!((width, height), (400, 200));
}

#[test]
fn test_unsupported_format_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diagram.bmp");

    let builder = DiagramBuilder::default();
    let result = builder.export(SOURCE, "bmp", &path, Viewport::default());

    assert!(matches!(result, Err(FiguraError::UnsupportedFormat(_))));
    assert!(!path.exists());
}

#[test]
fn test_write_diagram_to_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("diagram.svg");

    let builder = DiagramBuilder::default();
    let compilation = builder.compile(SOURCE, Viewport::default()).unwrap();
    let result = builder.write_diagram(compilation.diagram(), ExportFormat::Svg, &path);
    assert!(matches!(result, Err(FiguraError::Export(_))));
}

#[test]
fn test_render_png_in_memory() {
    let builder = DiagramBuilder::default();
    let compilation = builder.compile(SOURCE, Viewport::default()).unwrap();
    let bytes = builder.render_png(compilation.diagram()).unwrap();

    assert_eq!(&bytes[1..4], b"PNG");
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    assert_eq!(width, 800);
}
