//! PNG export of the rendered canvas

use crate::canvas::surface::Surface;
use crate::io::error::{Result, WalkError};
use std::path::Path;

/// Export the rendered canvas as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_surface_as_png(surface: &Surface, output_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| WalkError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    surface
        .image()
        .save(output_path)
        .map_err(|e| WalkError::ImageExport {
            path: output_path.into(),
            source: e,
        })
}
