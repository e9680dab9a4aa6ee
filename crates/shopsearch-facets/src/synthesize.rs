use shopsearch_core::filter::{FilterNode, UNBOUNDED_MAX};
use shopsearch_core::types::{Condition, Facet, FacetMode};

/// Stand-in node for a facet the provider left out although the shopper
/// constrained it.
///
/// Price and range facets are pinned to the condition's bounds. Any other
/// facet gets an item-less label node named after the facet field.
pub fn synthesize_node(facet: &Facet, condition: &Condition) -> FilterNode {
    let pinned = (facet.is_price() && condition.is_price()) || facet.mode == FacetMode::RangeResult;
    if pinned {
        let (min, max) = condition.bounds();
        FilterNode::pinned_range(facet.field.clone(), min.unwrap_or(0.0), max.unwrap_or(UNBOUNDED_MAX))
    } else {
        FilterNode::empty_label(facet.field.clone())
    }
}
