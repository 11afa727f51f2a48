//! Geometry primitives

pub mod rect;

pub use rect::Rectangle;
