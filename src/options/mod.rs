//! User-editable sprite-sheet settings with TOML preset support.
//!
//! All tweakable settings (output naming, camera placement, render range)
//! are consolidated here. Options serialize to/from TOML so a setup can be
//! saved as a preset and reused across targets.

mod camera;
mod output;
mod render;

use std::path::Path;

pub use camera::CameraOptions;
pub use output::{ImageFormat, OutputOptions};
pub use render::{RenderOptions, MAX_FRAME_SKIP};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SpriteCamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Output folder, naming and format.
    pub output: OutputOptions,
    /// Camera placement and lens.
    pub camera: CameraOptions,
    /// Orbit steps and frame range.
    pub render: RenderOptions,
}

impl Options {
    /// Generate JSON Schema describing the editable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`SpriteCamError::Io`] if the file cannot be read,
    /// [`SpriteCamError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, SpriteCamError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// [`SpriteCamError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, SpriteCamError> {
        toml::from_str(content)
            .map_err(|e| SpriteCamError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`SpriteCamError::OptionsParse`] if serialization fails,
    /// [`SpriteCamError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SpriteCamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SpriteCamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(SpriteCamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraType;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("spritecam-options-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
camera_type = "perspective"
inclination_deg = 30.0

[output]
format = "open_exr"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.camera_type, CameraType::Perspective);
        assert_eq!(opts.camera.inclination_deg, 30.0);
        assert_eq!(opts.output.format, ImageFormat::OpenExr);
        // Everything else should be default
        assert_eq!(opts.camera.distance, 20.0);
        assert_eq!(opts.render.increments, 8);
        assert_eq!(opts.output.export_folder, "export");
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[render]\nincrements = \"many\"").unwrap_err();
        assert!(matches!(err, SpriteCamError::OptionsParse(_)));
    }

    #[test]
    fn presets_save_and_list() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.render.increments = 16;
        opts.save(&dir.join("turntable.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["default", "turntable"]);
        let loaded = Options::load(&dir.join("turntable.toml")).unwrap();
        assert_eq!(loaded.render.increments, 16);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn frame_stride_honors_toggle() {
        let mut render = RenderOptions {
            frame_start: 1,
            frame_end: 25,
            ..RenderOptions::default()
        };
        assert_eq!(render.frames().count(), 25);
        render.frame_skip_enabled = true;
        assert_eq!(render.frames().collect::<Vec<_>>(), vec![1, 11, 21]);
        render.frame_skip = 0;
        assert_eq!(render.frame_stride(), 1);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("output"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("render"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("inclination_deg").is_some());
        assert!(camera.get("pivot_angle_deg").is_some());
        assert_eq!(camera["distance"]["maximum"], 1000.0);
    }
}
