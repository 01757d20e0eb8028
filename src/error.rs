//! Crate-level error types.

use std::fmt;

use crate::scene::EntityId;

/// Errors produced by the spritecam crate.
///
/// Out-of-range numeric inputs (step counts, indices, lens values) are never
/// reported here; they are clamped or wrapped where they enter the system.
#[derive(Debug)]
pub enum SpriteCamError {
    /// Target geometry is empty or contains non-finite coordinates.
    InvalidGeometry(String),
    /// The host does not know the requested entity handle.
    MissingEntity(EntityId),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The renderer failed to produce one output image.
    Render {
        /// Orbit step being rendered.
        step: u32,
        /// Animation frame being rendered.
        frame: i32,
        /// Underlying I/O failure reported by the renderer.
        source: std::io::Error,
    },
}

impl fmt::Display for SpriteCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry(msg) => {
                write!(f, "invalid target geometry: {msg}")
            }
            Self::MissingEntity(id) => write!(f, "unknown entity {id}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Render {
                step,
                frame,
                source,
            } => {
                write!(f, "render failed at step {step}, frame {frame}: {source}")
            }
        }
    }
}

impl std::error::Error for SpriteCamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Render { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SpriteCamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
