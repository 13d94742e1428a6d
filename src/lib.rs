//! SubImage decides whether one image is an axis-aligned crop of another.
//!
//! Both images are decoded to 8-bit grayscale, the smaller one is slid over
//! the larger one with normalized cross-correlation, and the best score is
//! compared against a fixed acceptance threshold. Matching is delegated to
//! `imageproc`; the `rayon` feature switches it to the parallel variant.

pub mod decision;
pub mod image;
pub mod pipeline;
pub mod roles;
pub mod search;
mod trace;
pub mod util;

pub use crate::image::io::{can_load_file, load_gray_image};
pub use crate::image::Dims;
pub use decision::{Decision, MatchConfig, DEFAULT_THRESHOLD};
pub use pipeline::{find_subimage, Report};
pub use roles::{assign_roles, Orientation, Roles};
pub use search::{MatchResult, Matcher};
pub use util::{SubImageError, SubImageResult};
