//! End-to-end run over two image paths.

use crate::decision::{Decision, MatchConfig};
use crate::image::io::{ensure_loadable, load_gray_image};
use crate::image::Dims;
use crate::roles::assign_roles;
use crate::search::Matcher;
use crate::trace::{trace_event, trace_span};
use crate::util::SubImageResult;
use std::path::Path;

/// Outcome of [`find_subimage`] together with the role assignment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    /// Accepted location or the no-match sentinel.
    pub decision: Decision,
    /// Dimensions of the searched image.
    pub search: Dims,
    /// Dimensions of the query image.
    pub query: Dims,
    /// True if the first path was used as the query.
    pub query_is_first: bool,
}

/// Checks whether one of two images is a crop of the other.
///
/// Both paths are probed before either is decoded, so an unreadable second
/// path fails without touching the codec. The decoded images are moved into
/// their roles and dropped once the correlation surface has been reduced.
pub fn find_subimage<P, Q>(first: P, second: Q, config: &MatchConfig) -> SubImageResult<Report>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let first = first.as_ref();
    let second = second.as_ref();
    config.validate()?;
    let _span = trace_span!("find_subimage").entered();

    ensure_loadable(first)?;
    ensure_loadable(second)?;

    let first_img = load_gray_image(first)?;
    let second_img = load_gray_image(second)?;

    let roles = assign_roles(first_img, second_img)?;
    let search = Dims::of(&roles.search);
    let query = Dims::of(&roles.query);
    let query_is_first = roles.query_is_first;
    trace_event!(
        "roles",
        query_is_first = query_is_first,
        search_width = search.width,
        search_height = search.height,
    );

    let best = Matcher::new()
        .with_parallel(config.parallel)
        .best_match(&roles.search, &roles.query)?;
    drop(roles);

    let decision = config.decide(best);
    trace_event!("decision", found = decision.is_found(), threshold = config.threshold);

    Ok(Report {
        decision,
        search,
        query,
        query_is_first,
    })
}
