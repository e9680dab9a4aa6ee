use shopsearch_core::facet_result::PartialFacetResult;
use shopsearch_core::filter::FilterNode;
use shopsearch_core::registry::HandlerRegistry;
use shopsearch_core::types::{Facet, QuerySpecification};

use crate::handlers::{default_facet_handlers, FacetHandler};
use crate::synthesize::synthesize_node;

/// Rebuilds the requested facets from a provider filter tree.
///
/// Output follows the order of `spec.facets()` with at most one result per
/// facet. The tree is never modified; synthesized nodes live only for the
/// duration of the call.
pub struct FacetReconstructor {
    handlers: HandlerRegistry<dyn FacetHandler>,
}

impl Default for FacetReconstructor {
    fn default() -> Self {
        Self::new()
    }
}

impl FacetReconstructor {
    pub fn new() -> Self {
        Self::with_handlers(default_facet_handlers())
    }

    pub fn with_handlers(handlers: Vec<Box<dyn FacetHandler>>) -> Self {
        Self { handlers: HandlerRegistry::new(handlers) }
    }

    pub fn reconstruct(&self, spec: &QuerySpecification, tree: &[FilterNode]) -> Vec<PartialFacetResult> {
        spec.facets().iter().filter_map(|facet| self.reconstruct_facet(spec, tree, facet)).collect()
    }

    fn reconstruct_facet(&self, spec: &QuerySpecification, tree: &[FilterNode], facet: &Facet) -> Option<PartialFacetResult> {
        let synthesized;
        let node = match tree.iter().find(|n| n.name() == facet.field) {
            Some(node) => node,
            None => {
                let Some(condition) = spec.user_condition(&facet.name) else {
                    tracing::debug!(facet = %facet.name, "facet absent from response and not selected, skipped");
                    return None;
                };
                synthesized = synthesize_node(facet, condition);
                &synthesized
            }
        };
        let Some(handler) = self.handlers.resolve(node) else {
            tracing::debug!(facet = %facet.name, "no handler for filter node, skipped");
            return None;
        };
        handler.generate_partial_facet(facet, spec, node)
    }
}
