//! Facet handlers turn one filter node into one renderable facet result.

use shopsearch_core::facet_result::PartialFacetResult;
use shopsearch_core::filter::FilterNode;
use shopsearch_core::registry::Supports;
use shopsearch_core::types::{Facet, QuerySpecification};

mod category;
mod color;
mod image;
mod range;
mod text;

pub use category::CategoryFacetHandler;
pub use color::ColorFacetHandler;
pub use image::ImageFacetHandler;
pub use range::RangeFacetHandler;
pub use text::TextFacetHandler;

pub trait FacetHandler: Supports<FilterNode> + Send + Sync {
    /// `None` means the facet has nothing to show and is omitted.
    fn generate_partial_facet(
        &self,
        facet: &Facet,
        spec: &QuerySpecification,
        node: &FilterNode,
    ) -> Option<PartialFacetResult>;
}

/// Category first, text last: text accepts every list node.
pub fn default_facet_handlers() -> Vec<Box<dyn FacetHandler>> {
    vec![
        Box::new(CategoryFacetHandler),
        Box::new(ColorFacetHandler),
        Box::new(ImageFacetHandler),
        Box::new(RangeFacetHandler),
        Box::new(TextFacetHandler),
    ]
}

/// Values the shopper picked for this facet.
fn selected_values(facet: &Facet, spec: &QuerySpecification) -> Vec<String> {
    spec.user_condition(&facet.name).map(|c| c.selected_values()).unwrap_or_default()
}

fn facet_label(facet: &Facet, display: Option<&String>) -> String {
    display.filter(|d| !d.is_empty()).cloned().unwrap_or_else(|| facet.label.clone())
}
