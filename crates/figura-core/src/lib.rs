//! Figura Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Figura parser and
//! renderer. It includes:
//!
//! - **Colors**: CSS color and paint handling ([`color::Color`], [`color::Paint`])
//! - **Geometry**: Points, sizes and bounds in user space ([`geometry`] module)
//! - **Semantic**: Primitive kinds and validated primitives ([`semantic`] module)
//! - **Draw**: Strokes, size mapping and drawing commands ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
