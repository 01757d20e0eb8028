//! Render orchestration: which images to produce and in what order.
//!
//! The actual image rendering belongs to the host and is reached through
//! [`FrameRenderer`]. This module only decides camera steps, frames and
//! output paths, and keeps track of progress so runs can be resumed.

/// The render loop.
pub mod driver;
/// Job enumeration and output naming.
pub mod plan;

pub use driver::{FrameRenderer, RenderDriver};
pub use plan::{RenderCheckpoint, RenderJob, RenderPlan};
