//! Template search over the correlation surface.
//!
//! The surface itself comes from `imageproc`; this module validates the
//! inputs and reduces the surface to its single best placement.

mod peak;

use crate::image::Dims;
use crate::trace::{trace_event, trace_span};
use crate::util::{SubImageError, SubImageResult};
use image::{GrayImage, ImageBuffer, Luma};
use imageproc::template_matching::MatchTemplateMethod;

pub use peak::best_peak;

/// Correlation surface with one score per top-left placement.
pub type ScoreSurface = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Best placement of the query within the search image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult {
    /// Column of the query's top-left pixel.
    pub x: u32,
    /// Row of the query's top-left pixel.
    pub y: u32,
    /// Normalized cross-correlation score, `f32::NEG_INFINITY` if no
    /// placement produced a finite score.
    pub score: f32,
}

/// Normalized cross-correlation matcher.
#[derive(Clone, Copy, Debug, Default)]
pub struct Matcher {
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    parallel: bool,
}

impl Matcher {
    /// Creates a single-threaded matcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the parallel surface computation.
    ///
    /// Has no effect unless the `rayon` feature is enabled.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Computes the full correlation surface of `query` over `search`.
    pub fn surface(&self, search: &GrayImage, query: &GrayImage) -> SubImageResult<ScoreSurface> {
        let search_dims = Dims::of(search);
        let query_dims = Dims::of(query);
        if query_dims.width == 0 || query_dims.height == 0 || !query_dims.fits_within(search_dims)
        {
            return Err(SubImageError::IncompatibleDimensions {
                first: query_dims,
                second: search_dims,
            });
        }

        let _span = trace_span!(
            "match_template",
            search_width = search_dims.width,
            search_height = search_dims.height,
            query_width = query_dims.width,
            query_height = query_dims.height
        )
        .entered();

        Ok(self.run(search, query))
    }

    /// Returns the global maximum of the correlation surface.
    pub fn best_match(&self, search: &GrayImage, query: &GrayImage) -> SubImageResult<MatchResult> {
        let surface = self.surface(search, query)?;
        let best = best_peak(&surface);
        trace_event!("best_match", x = best.x, y = best.y, score = best.score);
        Ok(best)
    }

    #[cfg(feature = "rayon")]
    fn run(&self, search: &GrayImage, query: &GrayImage) -> ScoreSurface {
        let method = MatchTemplateMethod::CrossCorrelationNormalized;
        if self.parallel {
            imageproc::template_matching::match_template_parallel(search, query, method)
        } else {
            imageproc::template_matching::match_template(search, query, method)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn run(&self, search: &GrayImage, query: &GrayImage) -> ScoreSurface {
        imageproc::template_matching::match_template(
            search,
            query,
            MatchTemplateMethod::CrossCorrelationNormalized,
        )
    }
}
