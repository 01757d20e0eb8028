// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on known-good fixtures
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! Deterministic orbit-camera placement for rendering sprite sheets.
//!
//! Given a 3D target, spritecam computes where a camera must stand for each
//! of N evenly spaced azimuth steps around it, how its lens and clip planes
//! must be set so the target stays in frame, and drives a host renderer
//! through every (step, frame) pair into a structured folder tree.
//!
//! # Key entry points
//!
//! - [`scene::analyze`] - bounding box of a target
//! - [`scene::OrbitFrame::build`] - the reference frame the camera circles
//! - [`camera::pose::solve`] / [`camera::intrinsics::solve`] - camera
//!   transform and projection for one set of angles
//! - [`orbit::OrbitSession`] - parameters, step index and current camera
//! - [`render::RenderDriver`] - the steps × frames render loop
//! - [`options::Options`] - TOML-backed user settings
//!
//! # Architecture
//!
//! Every pose is a closed-form function of the orbit frame, the user angles
//! and the step index. Nothing accumulates between steps, so any step can be
//! recomputed (or rendered again) in isolation. The host scene and renderer
//! sit behind the [`scene::SceneHost`] and [`render::FrameRenderer`] traits.

pub mod camera;
pub mod error;
pub mod options;
pub mod orbit;
pub mod render;
pub mod scene;
pub mod util;

pub use error::SpriteCamError;
