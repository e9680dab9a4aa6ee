use shopsearch_core::facet_result::{PartialFacetResult, TreeFacetResult, TreeItem};
use shopsearch_core::filter::{FilterItem, FilterNode};
use shopsearch_core::registry::Supports;
use shopsearch_core::types::{Facet, QuerySpecification, CATEGORY_FIELD};

use super::{facet_label, selected_values, FacetHandler};

/// Category filters arrive as nested items; ids are the `_`-joined path.
pub struct CategoryFacetHandler;

impl Supports<FilterNode> for CategoryFacetHandler {
    fn supports(&self, node: &FilterNode) -> bool {
        matches!(node, FilterNode::Items(f) if f.name == CATEGORY_FIELD)
    }
}

impl FacetHandler for CategoryFacetHandler {
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
        let items = build_tree(&filter.items, None, &selected);
        Some(PartialFacetResult::Tree(TreeFacetResult {
            facet_name: facet.name.clone(),
            active: items.iter().any(has_active),
            label: facet_label(facet, filter.display.as_ref()),
            items,
            field_name: facet.form_field_name.clone(),
        }))
    }
}

fn build_tree(items: &[FilterItem], parent: Option<&str>, selected: &[String]) -> Vec<TreeItem> {
    items
        .iter()
        .map(|item| {
            let id = match parent {
                Some(p) => format!("{}_{}", p, item.name),
                None => item.name.clone(),
            };
            TreeItem {
                active: selected.contains(&id),
                label: item.name.clone(),
                frequency: item.frequency,
                children: build_tree(&item.items, Some(&id), selected),
                id,
            }
        })
        .collect()
}

fn has_active(item: &TreeItem) -> bool {
    item.active || item.children.iter().any(has_active)
}
