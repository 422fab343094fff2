//! Multi-key sorting and free-text filtering over record collections

use crate::core::criteria::SortCriterion;
use crate::core::field::compare_values;
use crate::core::record::Record;
use std::cmp::Ordering;

/// Compare two records under an ordered list of criteria
///
/// Criteria are applied in list order and the first one that tells the
/// records apart decides. If every criterion ties (or there are none) the
/// records compare equal.
pub fn compare_records<'a, R, I>(a: &R, b: &R, criteria: I) -> Ordering
where
    R: Record,
    I: IntoIterator<Item = &'a SortCriterion>,
{
    for criterion in criteria {
        let ordering = compare_values(
            &a.field_value(criterion.field),
            &b.field_value(criterion.field),
        );
        if ordering != Ordering::Equal {
            return criterion.direction.apply(ordering);
        }
    }
    Ordering::Equal
}

/// Sorted copy of `records`
///
/// The sort is stable, so records that tie on every criterion keep their
/// input order, and re-deriving a derived view returns it unchanged.
pub fn derive_view<R: Record>(records: &[R], criteria: &[SortCriterion]) -> Vec<R> {
    let mut view = records.to_vec();
    view.sort_by(|a, b| compare_records(a, b, criteria));
    view
}

/// Keep the records whose fields contain `term`, ignoring case
///
/// An empty term keeps everything. Relative order is preserved.
pub fn filter_by_search<R: Record>(view: Vec<R>, term: &str) -> Vec<R> {
    if term.is_empty() {
        return view;
    }
    let needle = term.to_lowercase();
    view.into_iter()
        .filter(|record| matches_search(record, &needle))
        .collect()
}

/// Whether any field of `record` contains the already lowercased `needle`
pub fn matches_search<R: Record>(record: &R, needle: &str) -> bool {
    record
        .search_values()
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}
