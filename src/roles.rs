//! Search/query role assignment by bounding-box comparison.

use crate::image::Dims;
use crate::util::{SubImageError, SubImageResult};
use image::GrayImage;

/// Which of two images is searched, decided from dimensions alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The first image fits inside the second; the second is searched.
    SecondIsSearch,
    /// The second image is strictly smaller on both axes; the first is searched.
    FirstIsSearch,
    /// One image is wider and the other taller.
    Incomparable,
}

impl Orientation {
    /// Compares two dimension pairs.
    ///
    /// Equal sizes resolve to [`Orientation::SecondIsSearch`]. The reverse
    /// direction requires the second image to be strictly smaller on both
    /// axes, so a pair that is equal on one axis and larger on the other only
    /// resolves when the first image is the smaller one.
    pub fn resolve(first: Dims, second: Dims) -> Self {
        if first.fits_within(second) {
            Orientation::SecondIsSearch
        } else if second.width < first.width && second.height < first.height {
            Orientation::FirstIsSearch
        } else {
            Orientation::Incomparable
        }
    }
}

/// Decoded images after role assignment.
pub struct Roles {
    /// The larger image the query is slid over.
    pub search: GrayImage,
    /// The candidate crop.
    pub query: GrayImage,
    /// True if the query came from the first input.
    pub query_is_first: bool,
}

/// Moves two decoded images into their search and query roles.
///
/// Fails with [`SubImageError::IncompatibleDimensions`] naming both pairs
/// when neither image fits inside the other.
pub fn assign_roles(first: GrayImage, second: GrayImage) -> SubImageResult<Roles> {
    let first_dims = Dims::of(&first);
    let second_dims = Dims::of(&second);
    match Orientation::resolve(first_dims, second_dims) {
        Orientation::SecondIsSearch => Ok(Roles {
            search: second,
            query: first,
            query_is_first: true,
        }),
        Orientation::FirstIsSearch => Ok(Roles {
            search: first,
            query: second,
            query_is_first: false,
        }),
        Orientation::Incomparable => Err(SubImageError::IncompatibleDimensions {
            first: first_dims,
            second: second_dims,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{assign_roles, Orientation};
    use crate::image::Dims;
    use crate::util::SubImageError;
    use image::GrayImage;

    #[test]
    fn resolve_truth_table() {
        let cases = [
            ((10, 10), (20, 20), Orientation::SecondIsSearch),
            ((10, 10), (10, 10), Orientation::SecondIsSearch),
            ((10, 20), (10, 30), Orientation::SecondIsSearch),
            ((20, 20), (10, 10), Orientation::FirstIsSearch),
            ((20, 20), (10, 20), Orientation::Incomparable),
            ((100, 50), (50, 100), Orientation::Incomparable),
            ((50, 100), (100, 50), Orientation::Incomparable),
        ];
        for ((w1, h1), (w2, h2), expected) in cases {
            let got = Orientation::resolve(Dims::new(w1, h1), Dims::new(w2, h2));
            assert_eq!(got, expected, "({w1}, {h1}) vs ({w2}, {h2})");
        }
    }

    #[test]
    fn assign_roles_orders_by_size() {
        let big = GrayImage::new(8, 6);
        let small = GrayImage::new(3, 2);

        let roles = assign_roles(big.clone(), small.clone()).unwrap();
        assert_eq!(roles.search.dimensions(), (8, 6));
        assert_eq!(roles.query.dimensions(), (3, 2));
        assert!(!roles.query_is_first);

        let roles = assign_roles(small, big).unwrap();
        assert_eq!(roles.search.dimensions(), (8, 6));
        assert!(roles.query_is_first);
    }

    #[test]
    fn incomparable_images_report_both_pairs() {
        let err = assign_roles(GrayImage::new(100, 50), GrayImage::new(50, 100))
            .err()
            .unwrap();
        assert_eq!(
            err,
            SubImageError::IncompatibleDimensions {
                first: Dims::new(100, 50),
                second: Dims::new(50, 100),
            }
        );
        assert_eq!(
            err.to_string(),
            "Bad dimensions. Neither image can be a proper subset of the other: (100, 50), (50, 100)"
        );
    }
}
