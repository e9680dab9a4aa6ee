use shopsearch_core::facet_result::{MediaListFacetResult, MediaListItem, PartialFacetResult};
use shopsearch_core::filter::{FilterNode, ItemsKind};
use shopsearch_core::registry::Supports;
use shopsearch_core::types::{Facet, QuerySpecification};

use super::{facet_label, selected_values, FacetHandler};

/// Image swatches. Image URLs are passed through as the provider sent them.
pub struct ImageFacetHandler;

impl Supports<FilterNode> for ImageFacetHandler {
    fn supports(&self, node: &FilterNode) -> bool {
        matches!(node, FilterNode::Items(f) if f.kind == ItemsKind::Image)
    }
}

impl FacetHandler for ImageFacetHandler {
    fn generate_partial_facet(
        &self,
        facet: &Facet,
        spec: &QuerySpecification,
        node: &FilterNode,
    ) -> Option<PartialFacetResult> {
        let FilterNode::Items(filter) = node else {
            return None;
        };
        if filter.items.is_empty() {
            return None;
        }
        let selected = selected_values(facet, spec);
        let items: Vec<MediaListItem> = filter
            .items
            .iter()
            .map(|item| MediaListItem {
                id: item.name.clone(),
                label: item.name.clone(),
                active: selected.contains(&item.name),
                image: item.image.clone().filter(|url| !url.is_empty()),
                color: None,
            })
            .collect();
        Some(PartialFacetResult::MediaList(MediaListFacetResult {
            facet_name: facet.name.clone(),
            active: items.iter().any(|i| i.active),
            label: facet_label(facet, filter.display.as_ref()),
            items,
            field_name: facet.form_field_name.clone(),
        }))
    }
}
