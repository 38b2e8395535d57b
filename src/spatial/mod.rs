//! Spatial grid structures for brick layers
//!
//! This module contains the layer grid entity shared by the validator and
//! the re-tiling engine, together with the neighbor offset table both
//! algorithms scan with.

/// Brick layer grid and placement primitives
pub mod layer;

pub use layer::Layer;
