//! Global maximum extraction from a correlation surface.

use super::{MatchResult, ScoreSurface};

/// Returns the highest finite score and its location.
///
/// Scans in row-major order and keeps the first position on ties, so the
/// smallest `y` wins and then the smallest `x`. Non-finite scores, which
/// normalized correlation produces for all-zero windows, are skipped. If no
/// finite score exists the result is `(0, 0)` with `f32::NEG_INFINITY`.
pub fn best_peak(surface: &ScoreSurface) -> MatchResult {
    let mut best = MatchResult {
        x: 0,
        y: 0,
        score: f32::NEG_INFINITY,
    };
    for (x, y, pixel) in surface.enumerate_pixels() {
        let score = pixel[0];
        if score.is_finite() && score > best.score {
            best = MatchResult { x, y, score };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::best_peak;
    use crate::search::ScoreSurface;
    use image::Luma;

    #[test]
    fn ties_keep_first_row_major_position() {
        let mut surface = ScoreSurface::new(4, 3);
        surface.put_pixel(3, 0, Luma([0.5]));
        surface.put_pixel(1, 2, Luma([0.9]));
        surface.put_pixel(2, 1, Luma([0.9]));

        let best = best_peak(&surface);
        assert_eq!((best.x, best.y), (2, 1));
        assert_eq!(best.score, 0.9);
    }

    #[test]
    fn non_finite_scores_are_ignored() {
        let mut surface = ScoreSurface::from_pixel(3, 3, Luma([f32::NAN]));
        surface.put_pixel(2, 2, Luma([0.25]));
        let best = best_peak(&surface);
        assert_eq!((best.x, best.y, best.score), (2, 2, 0.25));

        let empty = ScoreSurface::from_pixel(2, 2, Luma([f32::NAN]));
        assert_eq!(best_peak(&empty).score, f32::NEG_INFINITY);
    }
}
