//! `spritecam` command-line front end.
//!
//! Prints the options schema, or the camera state and output files of every
//! orbit step for a box-shaped stand-in target.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use glam::{Quat, Vec3};
use serde::Serialize;
use spritecam::camera::CameraState;
use spritecam::options::Options;
use spritecam::orbit::{OrbitParams, OrbitSession};
use spritecam::render::RenderPlan;
use spritecam::scene::MemoryScene;

#[derive(Parser)]
#[command(name = "spritecam", version, about = "Orbit-camera planning for sprite sheets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the JSON schema of the options file.
    Schema,
    /// Print camera state and output paths for every orbit step.
    Plan {
        /// Options TOML file; defaults are used when omitted.
        #[arg(long)]
        options: Option<PathBuf>,
        /// Target box size.
        #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = vec![1.0_f32, 1.0, 1.0])]
        size: Vec<f32>,
        /// Target name used for output folders.
        #[arg(long, default_value = "target")]
        name: String,
    },
}

#[derive(Serialize)]
struct StepReport {
    step: u32,
    angle_deg: f32,
    camera: CameraState,
    files: Vec<PathBuf>,
}

fn plan(
    options_path: Option<PathBuf>,
    size: &[f32],
    name: &str,
) -> Result<Vec<StepReport>, Box<dyn std::error::Error>> {
    let options = match options_path {
        Some(path) => Options::load(&path)?,
        None => Options::default(),
    };
    let size = match size {
        [x, y, z] => Vec3::new(*x, *y, *z),
        _ => return Err("--size takes exactly three values".into()),
    };

    let mut scene = MemoryScene::new();
    let target = scene.add_box_target(name, Vec3::ZERO, Quat::IDENTITY, size);
    let mut session = OrbitSession::new(OrbitParams::from_options(&options));
    session.retarget_from_host(&scene, Some(target))?;

    let render_plan = RenderPlan::new(&options, name);
    let reports = session
        .stepper()
        .steps()
        .map(|step| StepReport {
            step,
            angle_deg: session.stepper().angle_of(step).to_degrees(),
            camera: session.camera_for_step(step),
            files: render_plan
                .frames()
                .iter()
                .map(|&frame| render_plan.path_for(step, frame))
                .collect(),
        })
        .collect();
    Ok(reports)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Schema => {
            serde_json::to_writer_pretty(&mut out, &Options::json_schema())?;
        }
        Command::Plan {
            options,
            size,
            name,
        } => {
            let reports = plan(options, &size, &name)?;
            log::info!("planned {} orbit steps for {name}", reports.len());
            serde_json::to_writer_pretty(&mut out, &reports)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
