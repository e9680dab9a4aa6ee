use shopsearch_core::facet_result::{PartialFacetResult, ValueListFacetResult, ValueListItem};
use shopsearch_core::filter::FilterNode;
use shopsearch_core::registry::Supports;
use shopsearch_core::types::{Facet, FacetMode, QuerySpecification};

use super::{facet_label, selected_values, FacetHandler};

/// Catch-all for list filters: label, select and unknown types.
///
/// Selected values the provider did not list are appended as active items so
/// the shopper can still deselect them.
pub struct TextFacetHandler;

impl Supports<FilterNode> for TextFacetHandler {
    fn supports(&self, node: &FilterNode) -> bool {
        matches!(node, FilterNode::Items(_))
    }
}

impl FacetHandler for TextFacetHandler {
    fn generate_partial_facet(
        &self,
        facet: &Facet,
        spec: &QuerySpecification,
        node: &FilterNode,
    ) -> Option<PartialFacetResult> {
        let FilterNode::Items(filter) = node else {
            return None;
        };
        let user_selected = spec.has_user_condition(&facet.name);
        if filter.items.is_empty() && !user_selected {
            return None;
        }

        let selected = selected_values(facet, spec);
        let mut items: Vec<ValueListItem> = filter
            .items
            .iter()
            .map(|item| ValueListItem {
                id: item.name.clone(),
                label: item.name.clone(),
                active: selected.contains(&item.name),
                frequency: item.frequency,
            })
            .collect();
        for value in &selected {
            if !items.iter().any(|i| &i.id == value) {
                items.push(ValueListItem { id: value.clone(), label: value.clone(), active: true, frequency: None });
            }
        }

        let result = ValueListFacetResult {
            facet_name: facet.name.clone(),
            active: items.iter().any(|i| i.active),
            label: facet_label(facet, filter.display.as_ref()),
            items,
            field_name: facet.form_field_name.clone(),
        };
        Some(match facet.mode {
            FacetMode::RadioList => PartialFacetResult::RadioList(result),
            _ => PartialFacetResult::ValueList(result),
        })
    }
}
