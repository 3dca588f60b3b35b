use crate::types::dataset::{Category, Criterion};

/// Criteria grouped by category in importance order. Empty groups are
/// omitted; input order is kept inside a group.
pub fn group_by_category(criteria: &[Criterion]) -> Vec<(Category, Vec<&Criterion>)> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let members = criteria
                .iter()
                .filter(|criterion| criterion.category == category)
                .collect::<Vec<_>>();
            (!members.is_empty()).then_some((category, members))
        })
        .collect()
}
