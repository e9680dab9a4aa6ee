use shopsearch_core::facet_result::{MediaListFacetResult, MediaListItem, PartialFacetResult};
use shopsearch_core::filter::{FilterNode, ItemsKind};
use shopsearch_core::registry::Supports;
use shopsearch_core::types::{Facet, QuerySpecification};

use super::{facet_label, selected_values, FacetHandler};

pub struct ColorFacetHandler;

impl Supports<FilterNode> for ColorFacetHandler {
    fn supports(&self, node: &FilterNode) -> bool {
        matches!(node, FilterNode::Items(f) if f.kind == ItemsKind::Color)
    }
}

impl FacetHandler for ColorFacetHandler {
    fn generate_partial_facet(
        &self,
        facet: &Facet,
        spec: &QuerySpecification,
        node: &FilterNode,
    ) -> Option<PartialFacetResult> {
        let FilterNode::Items(filter) = node else {
            return None;
        };
        let selected = selected_values(facet, spec);
        let items: Vec<MediaListItem> = filter
            .items
            .iter()
            .map(|item| MediaListItem {
                id: item.name.clone(),
                label: item.name.clone(),
                active: selected.contains(&item.name),
                image: item.image.clone(),
                color: item.color.clone().filter(|c| !c.is_empty()),
            })
            .collect();
        if items.is_empty() {
            return None;
        }
        Some(PartialFacetResult::MediaList(MediaListFacetResult {
            facet_name: facet.name.clone(),
            active: items.iter().any(|i| i.active),
            label: facet_label(facet, filter.display.as_ref()),
            items,
            field_name: facet.form_field_name.clone(),
        }))
    }
}
