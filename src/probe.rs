//! Intrinsic image sizes read from files (native only).

use std::path::Path;

use thiserror::Error;

use crate::model::IntrinsicSize;

/// Failure to read an image's dimensions.
#[derive(Error, Debug)]
#[error("Failed to read image dimensions of {path}: {source}")]
pub struct ProbeError {
    path: String,
    #[source]
    source: image::ImageError,
}

/// Read the pixel dimensions of an image file without decoding it fully.
pub fn intrinsic_size(path: &Path) -> Result<IntrinsicSize, ProbeError> {
    let (width, height) = image::image_dimensions(path).map_err(|source| ProbeError {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("{:?} is {}x{}", path, width, height);
    Ok(IntrinsicSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let err = intrinsic_size(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.png"));
    }

    #[test]
    fn test_reads_png_dimensions() {
        let dir = std::env::temp_dir().join(format!("ipz-probe-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("wide.png");
        image::RgbImage::new(40, 10).save(&path).unwrap();

        assert_eq!(intrinsic_size(&path).unwrap(), IntrinsicSize::new(40, 10));
        let _ = std::fs::remove_file(&path);
    }
}
