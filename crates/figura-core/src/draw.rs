//! Drawing definitions: stroke styles, size mapping and the drawing commands
//! produced by the renderer.

mod command;
mod mapping;
mod stroke;

pub use command::{ArrowHead, DrawCommand, Rotation, Style};
pub use mapping::{SizeMapping, SizeMappingError};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
