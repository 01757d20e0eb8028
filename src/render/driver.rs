//! Sequential steps-by-frames render loop.

use std::path::Path;

use super::plan::{RenderCheckpoint, RenderPlan};
use crate::error::SpriteCamError;
use crate::orbit::OrbitSession;
use crate::scene::{with_selection_restored, EntityId, SceneHost};

/// The host's "render the current frame to a file" operation.
pub trait FrameRenderer {
    /// Show animation `frame` through the active camera and write the image
    /// to `output`.
    ///
    /// # Errors
    ///
    /// Any I/O failure of the host renderer.
    fn render_frame(&mut self, frame: i32, output: &Path) -> std::io::Result<()>;
}

/// Walks a [`RenderPlan`] in order, moving the camera once per orbit step.
///
/// The driver remembers the last image it finished, so a failed or
/// interrupted run can be resumed with [`run`](Self::run) from
/// [`last_completed`](Self::last_completed).
#[derive(Debug, Clone)]
pub struct RenderDriver {
    plan: RenderPlan,
    last_completed: Option<RenderCheckpoint>,
}

impl RenderDriver {
    /// Driver for a plan, starting from the beginning.
    #[must_use]
    pub fn new(plan: RenderPlan) -> Self {
        Self {
            plan,
            last_completed: None,
        }
    }

    /// The plan being rendered.
    #[must_use]
    pub fn plan(&self) -> &RenderPlan {
        &self.plan
    }

    /// Last image written successfully, if any.
    #[must_use]
    pub fn last_completed(&self) -> Option<RenderCheckpoint> {
        self.last_completed
    }

    /// Render every job after `resume_after` (or all of them).
    ///
    /// The plan's step count drives the orbit: a session sized differently
    /// is resized for the run, so every folder holds the angle its step
    /// number names. The camera entity is selected while rendering and the
    /// host's previous selection is restored afterwards. The session returns
    /// to the step count and step it had before the run.
    ///
    /// # Errors
    ///
    /// [`SpriteCamError::Io`] if a step folder cannot be created,
    /// [`SpriteCamError::Render`] if the renderer fails, or the host's error
    /// when the camera cannot be updated. Jobs before the failure stay
    /// recorded in [`last_completed`](Self::last_completed).
    pub fn run<H, R>(
        &mut self,
        session: &mut OrbitSession,
        host: &mut H,
        camera: EntityId,
        renderer: &mut R,
        resume_after: Option<RenderCheckpoint>,
    ) -> Result<usize, SpriteCamError>
    where
        H: SceneHost + ?Sized,
        R: FrameRenderer + ?Sized,
    {
        let start_count = session.stepper().step_count();
        let start_index = session.stepper().index();
        if start_count != self.plan.step_count() {
            log::warn!(
                "session has {start_count} orbit steps, plan has {}; using the plan's",
                self.plan.step_count()
            );
            session.set_step_count(i64::from(self.plan.step_count()));
        }
        self.last_completed = resume_after;

        let result = with_selection_restored(host, |host| {
            host.select_only(camera);
            self.render_jobs(session, host, camera, renderer, resume_after)
        });

        session.set_step_count(i64::from(start_count));
        session.set_index(i64::from(start_index));
        if let Err(e) = session.apply(host, camera) {
            log::warn!("could not restore camera {camera}: {e}");
        }
        result
    }

    fn render_jobs<H, R>(
        &mut self,
        session: &mut OrbitSession,
        host: &mut H,
        camera: EntityId,
        renderer: &mut R,
        resume_after: Option<RenderCheckpoint>,
    ) -> Result<usize, SpriteCamError>
    where
        H: SceneHost + ?Sized,
        R: FrameRenderer + ?Sized,
    {
        let mut current_step = None;
        let mut rendered = 0;

        for job in self.plan.jobs_after(resume_after) {
            if current_step != Some(job.step) {
                session.set_index(i64::from(job.step));
                session.apply(host, camera)?;
                std::fs::create_dir_all(self.plan.step_dir(job.step))?;
                log::info!(
                    "rendering step {}/{} at {}",
                    job.step + 1,
                    self.plan.step_count(),
                    session.camera().pose.position
                );
                current_step = Some(job.step);
            }

            renderer.render_frame(job.frame, &job.path).map_err(|source| {
                SpriteCamError::Render {
                    step: job.step,
                    frame: job.frame,
                    source,
                }
            })?;
            log::debug!("wrote {}", job.path.display());
            self.last_completed = Some(job.checkpoint());
            rendered += 1;
        }

        Ok(rendered)
    }
}
