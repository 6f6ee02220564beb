//! PNG export by rasterizing the SVG document with `resvg`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use resvg::{tiny_skia, usvg};

use crate::{
    Diagram,
    export::{self, Exporter, svg::Svg},
};

/// Rasterizes an SVG document at `scale` output pixels per user unit.
///
/// # Errors
///
/// Returns [`export::Error::Render`] if the document cannot be parsed, the
/// pixmap cannot be allocated or PNG encoding fails.
pub fn rasterize(svg_text: &str, scale: f32) -> Result<Vec<u8>, export::Error> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(export::Error::Render(format!(
            "PNG scale must be positive and finite, got {scale}"
        )));
    }

    let tree = usvg::Tree::from_str(svg_text, &usvg::Options::default())
        .map_err(|err| export::Error::Render(format!("Failed to parse SVG document: {err}")))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    debug!(width, height, scale; "Rasterizing SVG document");

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        export::Error::Render(format!("Cannot allocate a {width}x{height} image"))
    })?;

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| export::Error::Render(format!("Failed to encode PNG: {err}")))
}

/// Writes diagrams to a PNG file.
#[derive(Debug)]
pub struct PngFile {
    path: PathBuf,
    svg: Svg,
    scale: f32,
}

impl PngFile {
    pub fn new(path: impl AsRef<Path>, svg: Svg, scale: f32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            svg,
            scale,
        }
    }
}

impl Exporter for PngFile {
    fn export_diagram(&mut self, diagram: &Diagram) -> Result<(), export::Error> {
        let doc = self.svg.render_document(diagram);
        let bytes = rasterize(&doc.to_string(), self.scale)?;

        let file_name = self.path.display().to_string();
        info!(file_name, bytes = bytes.len(); "Creating PNG file");
        fs::write(&self.path, bytes).map_err(|err| {
            error!(file_name, err:err; "Failed to write PNG file");
            export::Error::Io(err)
        })
    }
}
