//! File probing and grayscale decoding via the `image` crate.

use crate::trace::{trace_event, trace_span};
use crate::util::{SubImageError, SubImageResult};
use image::{GrayImage, ImageReader};
use std::fs::{self, File};
use std::path::Path;

/// Returns true if `path` exists, is a regular file, and can be opened for reading.
///
/// Symlinks are followed. No bytes are read.
pub fn can_load_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => File::open(path).is_ok(),
        _ => false,
    }
}

/// Fails with [`SubImageError::Unreadable`] unless [`can_load_file`] accepts `path`.
pub fn ensure_loadable<P: AsRef<Path>>(path: P) -> SubImageResult<()> {
    let path = path.as_ref();
    if can_load_file(path) {
        Ok(())
    } else {
        Err(SubImageError::Unreadable {
            path: path.to_path_buf(),
        })
    }
}

/// Decodes the image at `path` and converts it to 8-bit grayscale.
///
/// The format is detected from the file contents. Any codec failure,
/// including I/O errors raised while decoding, is reported as
/// [`SubImageError::Decode`].
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> SubImageResult<GrayImage> {
    let path = path.as_ref();
    let _span = trace_span!("load_image", path = %path.display()).entered();

    let decode_err = |reason: String| SubImageError::Decode {
        path: path.to_path_buf(),
        reason,
    };
    let img = ImageReader::open(path)
        .map_err(|err| decode_err(err.to_string()))?
        .with_guessed_format()
        .map_err(|err| decode_err(err.to_string()))?
        .decode()
        .map_err(|err| decode_err(err.to_string()))?;

    let gray = img.into_luma8();
    trace_event!("decoded", width = gray.width(), height = gray.height());
    Ok(gray)
}
