use shopsearch_core::facet_result::{PartialFacetResult, RangeFacetResult};
use shopsearch_core::filter::FilterNode;
use shopsearch_core::registry::Supports;
use shopsearch_core::types::{Facet, QuerySpecification};

use super::{facet_label, FacetHandler};

pub struct RangeFacetHandler;

impl Supports<FilterNode> for RangeFacetHandler {
    fn supports(&self, node: &FilterNode) -> bool {
        matches!(node, FilterNode::Range(_))
    }
}

impl FacetHandler for RangeFacetHandler {
    fn generate_partial_facet(
        &self,
        facet: &Facet,
        spec: &QuerySpecification,
        node: &FilterNode,
    ) -> Option<PartialFacetResult> {
        let FilterNode::Range(range) = node else {
            return None;
        };
        let (min_field_name, max_field_name) = if facet.is_price() {
            ("min".to_string(), "max".to_string())
        } else {
            (format!("min{}", facet.form_field_name), format!("max{}", facet.form_field_name))
        };
        Some(PartialFacetResult::Range(RangeFacetResult {
            facet_name: facet.name.clone(),
            active: spec.has_user_condition(&facet.name),
            label: facet_label(facet, range.display.as_ref()),
            min: range.total.min,
            max: range.total.max,
            active_min: range.selected.min,
            active_max: range.selected.max,
            min_field_name,
            max_field_name,
            unit: range.unit.clone(),
            step_size: range.step_size,
        }))
    }
}
