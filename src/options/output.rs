use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Image file format written by the renderer.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    /// Portable Network Graphics.
    #[default]
    Png,
    /// JPEG.
    Jpeg,
    /// OpenEXR.
    OpenExr,
    /// TIFF.
    Tiff,
}

impl ImageFormat {
    /// File extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::OpenExr => "exr",
            Self::Tiff => "tif",
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
#[schemars(title = "Output", inline)]
#[serde(default)]
/// Where rendered images go and how they are named.
pub struct OutputOptions {
    /// Root folder for the rendered tree.
    #[schemars(title = "Export Folder")]
    pub export_folder: String,
    /// Appended to every file name before the extension.
    #[schemars(title = "Suffix")]
    pub file_suffix: String,
    /// Output image format.
    #[schemars(title = "Format")]
    pub format: ImageFormat,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            export_folder: "export".to_owned(),
            file_suffix: String::new(),
            format: ImageFormat::Png,
        }
    }
}
