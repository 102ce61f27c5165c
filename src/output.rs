//! Icon file naming and PNG writing.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::IconError;

/// Path of the icon for `size` inside `dir`: `<dir>/icon-<size>.png`.
#[must_use]
pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("icon-{size}.png"))
}

/// Write `canvas` as a PNG, creating the parent directory and replacing any
/// existing file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or encoding fails.
pub fn save_icon(canvas: &RgbaImage, path: &Path) -> Result<(), IconError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Image(format!("Failed to save {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn icon_names() {
        assert_eq!(icon_path(Path::new("icons"), 192), PathBuf::from("icons/icon-192.png"));
        assert_eq!(icon_path(Path::new("a/b"), 512), PathBuf::from("a/b/icon-512.png"));
    }

    #[test]
    fn save_creates_directory_and_overwrites() {
        let dir = std::env::temp_dir().join("pokeicons_output_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = icon_path(&dir.join("nested"), 192);

        save_icon(&RgbaImage::new(4, 4), &path).unwrap();
        assert!(path.exists());

        save_icon(&RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255])), &path).unwrap();
        let reread = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reread.dimensions(), (8, 8));
        assert_eq!(reread.get_pixel(0, 0), &Rgba([1, 2, 3, 255]));

        let data = std::fs::read(&path).unwrap();
        assert_eq!(&data[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn bare_filename_needs_no_directory() {
        let path = Path::new("icon-1.png");
        assert!(path.parent().filter(|p| !p.as_os_str().is_empty()).is_none());
    }
}
