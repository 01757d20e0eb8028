use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Largest accepted frame skip.
pub const MAX_FRAME_SKIP: u32 = 1000;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Renderer", inline)]
#[serde(default)]
/// Orbit steps and animation frames to render.
pub struct RenderOptions {
    /// Camera positions per full revolution.
    #[schemars(title = "Increment", range(min = 1, max = 99))]
    pub increments: u32,
    /// First animation frame (inclusive).
    #[schemars(title = "Frame Start")]
    pub frame_start: i32,
    /// Last animation frame (inclusive).
    #[schemars(title = "Frame End")]
    pub frame_end: i32,
    /// Render only every `frame_skip`-th frame.
    #[schemars(title = "Enable Frame-skip")]
    pub frame_skip_enabled: bool,
    /// Frame stride used when skipping is enabled.
    #[schemars(title = "Frame-skip", range(min = 1, max = 1000))]
    pub frame_skip: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            increments: 8,
            frame_start: 1,
            frame_end: 1,
            frame_skip_enabled: false,
            frame_skip: 10,
        }
    }
}

impl RenderOptions {
    /// Stride between rendered frames, 1 when skipping is off.
    #[must_use]
    pub fn frame_stride(&self) -> u32 {
        if self.frame_skip_enabled {
            self.frame_skip.clamp(1, MAX_FRAME_SKIP)
        } else {
            1
        }
    }

    /// Frames to render for each orbit step, in order. Empty when the range
    /// is inverted.
    pub fn frames(&self) -> impl Iterator<Item = i32> {
        (self.frame_start..=self.frame_end).step_by(self.frame_stride() as usize)
    }
}
