//! Rendering boundary
//!
//! The core hands a renderer a `FrameSnapshot` each tick. Entity types map
//! to `VisualDescriptor`s so a missing sprite falls back to a vector shape.

pub mod snapshot;
pub mod visual;

pub use snapshot::{FrameSnapshot, Sprite};
pub use visual::{Shape, VisualDescriptor};
