//! Decoded image dimensions and file loading.
//!
//! Pixel data is held in `image::GrayImage`; this module only adds the
//! dimension pair used when deciding which image is searched.

use std::fmt;

pub mod io;

/// Width and height of a decoded image in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dims {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl Dims {
    /// Creates a dimension pair.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reads the dimensions of a decoded grayscale image.
    pub fn of(img: &image::GrayImage) -> Self {
        Self::new(img.width(), img.height())
    }

    /// Returns true if `self` fits inside `other` along both axes.
    pub fn fits_within(&self, other: Dims) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}
