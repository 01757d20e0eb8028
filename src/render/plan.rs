//! Enumeration of every image a sprite-sheet run produces.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::options::Options;
use crate::orbit::OrbitStepper;

/// A single (step, frame) pair of a run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RenderCheckpoint {
    /// Orbit step.
    pub step: u32,
    /// Animation frame.
    pub frame: i32,
}

/// One image to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderJob {
    /// Orbit step the camera must be on.
    pub step: u32,
    /// Animation frame to show.
    pub frame: i32,
    /// Output file.
    pub path: PathBuf,
}

impl RenderJob {
    /// Position of this job in the run.
    #[must_use]
    pub fn checkpoint(&self) -> RenderCheckpoint {
        RenderCheckpoint {
            step: self.step,
            frame: self.frame,
        }
    }
}

/// The ordered list of images for one target: steps outermost, frames
/// innermost.
///
/// Files land in `<export>/<target>/<step>/<target>_<step>_<frame><suffix>.<ext>`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    root: PathBuf,
    target_name: String,
    suffix: String,
    extension: &'static str,
    step_count: u32,
    frames: Vec<i32>,
}

impl RenderPlan {
    /// Plan a run from options. Step count is clamped like the stepper's.
    #[must_use]
    pub fn new(options: &Options, target_name: &str) -> Self {
        let stepper = OrbitStepper::new(i64::from(options.render.increments));
        Self {
            root: Path::new(&options.output.export_folder).join(target_name),
            target_name: target_name.to_owned(),
            suffix: options.output.file_suffix.clone(),
            extension: options.output.format.extension(),
            step_count: stepper.step_count(),
            frames: options.render.frames().collect(),
        }
    }

    /// Orbit steps in the run.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Animation frames rendered at each step.
    #[must_use]
    pub fn frames(&self) -> &[i32] {
        &self.frames
    }

    /// Total number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.step_count as usize * self.frames.len()
    }

    /// Whether the run renders nothing (inverted frame range).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Folder holding one step's images.
    #[must_use]
    pub fn step_dir(&self, step: u32) -> PathBuf {
        self.root.join(format!("{step:02}"))
    }

    /// Output file for a (step, frame) pair.
    #[must_use]
    pub fn path_for(&self, step: u32, frame: i32) -> PathBuf {
        self.step_dir(step).join(format!(
            "{}_{step:02}_{frame:04}{}.{}",
            self.target_name, self.suffix, self.extension
        ))
    }

    /// All jobs in render order.
    pub fn jobs(&self) -> impl Iterator<Item = RenderJob> + '_ {
        (0..self.step_count).flat_map(move |step| {
            self.frames.iter().map(move |&frame| RenderJob {
                step,
                frame,
                path: self.path_for(step, frame),
            })
        })
    }

    /// Jobs strictly after `checkpoint`, or all jobs when it is `None`.
    pub fn jobs_after(
        &self,
        checkpoint: Option<RenderCheckpoint>,
    ) -> impl Iterator<Item = RenderJob> + '_ {
        self.jobs()
            .filter(move |job| checkpoint.is_none_or(|c| job.checkpoint() > c))
    }
}
