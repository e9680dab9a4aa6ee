//! Parser for the provider's XML 2.0 search response.
//!
//! Only a document that is not XML at all, or has the wrong root element, is
//! an error. Missing or malformed nodes inside a `searchResult` fall back to
//! empty values so a partial answer still reaches the shopper.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

use roxmltree::{Document, Node};
use thiserror::Error;

use shopsearch_core::filter::{Bounds, FilterItem, FilterNode, ItemsFilter, ItemsKind, RangeFilter, SelectMode};
use shopsearch_core::response::{DidYouMeanKind, ParsedResponse, ProductRef, Promotion, SmartDidYouMean};
use shopsearch_core::traits::ResponseParser;

const ROOT: &str = "searchResult";
const RANGE_TYPE: &str = "range-slider";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Unexpected root element <{0}>, expected <searchResult>")]
    UnexpectedRoot(String),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct XmlResponseParser;

impl XmlResponseParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_document(&self, raw: &str) -> Result<ParsedResponse, ParseError> {
        let doc = Document::parse(raw)?;
        let root = doc.root_element();
        if root.tag_name().name() != ROOT {
            return Err(ParseError::UnexpectedRoot(root.tag_name().name().to_string()));
        }

        let total_count = child(root, "results")
            .and_then(|r| child_text(r, "count"))
            .and_then(|c| c.parse().ok())
            .unwrap_or(0);
        let products = child(root, "products")
            .map(|p| elements(p, "product").into_iter().filter_map(parse_product).collect())
            .unwrap_or_default();
        let filters = child(root, "filters")
            .map(|f| elements(f, "filter").into_iter().filter_map(parse_filter).collect())
            .unwrap_or_default();
        let landing_page = child(root, "landingPage")
            .and_then(|l| l.attribute("link"))
            .filter(|link| !link.is_empty())
            .map(str::to_string);
        let promotion = child(root, "promotion").and_then(|p| {
            Some(Promotion { image: p.attribute("image")?.to_string(), link: p.attribute("link")?.to_string() })
        });
        let smart_did_you_mean = child(root, "query").and_then(parse_smart_did_you_mean);

        Ok(ParsedResponse { total_count, products, filters, landing_page, promotion, smart_did_you_mean })
    }
}

impl ResponseParser for XmlResponseParser {
    fn parse(&self, raw: &str) -> anyhow::Result<ParsedResponse> {
        Ok(self.parse_document(raw)?)
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|c| c.is_element() && c.tag_name().name() == name)
}

fn elements<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Vec<Node<'a, 'input>> {
    node.children().filter(|c| c.is_element() && c.tag_name().name() == name).collect()
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child(node, name).and_then(|c| c.text()).map(str::trim).filter(|t| !t.is_empty())
}

fn child_number(node: Node<'_, '_>, name: &str) -> Option<f64> {
    child_text(node, name).and_then(|t| t.parse().ok())
}

fn parse_product(node: Node<'_, '_>) -> Option<ProductRef> {
    node.attribute("id").map(str::trim).filter(|id| !id.is_empty()).map(ProductRef::new)
}

fn parse_filter(node: Node<'_, '_>) -> Option<FilterNode> {
    let Some(name) = child_text(node, "name") else {
        tracing::debug!("filter without name ignored");
        return None;
    };
    let display = child_text(node, "display").map(str::to_string);
    let kind = child_text(node, "type").unwrap_or("label");

    if kind == RANGE_TYPE {
        let attributes = child(node, "attributes");
        let range = |key: &str| attributes.and_then(|a| child(a, key)).map(parse_bounds);
        let (total, selected) = match (range("totalRange"), range("selectedRange")) {
            (Some(t), Some(s)) => (t, s),
            (Some(t), None) => (t, t),
            (None, Some(s)) => (s, s),
            (None, None) => (Bounds::default(), Bounds::default()),
        };
        return Some(FilterNode::Range(RangeFilter {
            name: name.to_string(),
            display,
            total,
            selected,
            step_size: attributes.and_then(|a| child_number(a, "stepSize")),
            unit: attributes.and_then(|a| child_text(a, "unit")).map(str::to_string),
        }));
    }

    Some(FilterNode::Items(ItemsFilter {
        name: name.to_string(),
        display,
        kind: ItemsKind::from_tag(kind),
        select: child_text(node, "select").map(SelectMode::from_tag).unwrap_or_default(),
        items: parse_items(node),
    }))
}

fn parse_bounds(node: Node<'_, '_>) -> Bounds {
    Bounds { min: child_number(node, "min").unwrap_or(0.0), max: child_number(node, "max").unwrap_or(0.0) }
}

fn parse_items(node: Node<'_, '_>) -> Vec<FilterItem> {
    let Some(items) = child(node, "items") else {
        return Vec::new();
    };
    elements(items, "item")
        .into_iter()
        .filter_map(|item| {
            let name = child_text(item, "name")?;
            Some(FilterItem {
                name: name.to_string(),
                frequency: child_text(item, "frequency").and_then(|f| f.parse().ok()),
                image: child_text(item, "image").map(str::to_string),
                color: child_text(item, "color").map(str::to_string),
                items: parse_items(item),
            })
        })
        .collect()
}

/// A `didYouMeanQuery` wins over a corrected or improved `queryString`.
fn parse_smart_did_you_mean(query: Node<'_, '_>) -> Option<SmartDidYouMean> {
    let query_string = child(query, "queryString");
    let current = query_string.and_then(|q| q.text()).map(str::trim).filter(|t| !t.is_empty());

    if let Some(alternative) = child_text(query, "didYouMeanQuery") {
        return Some(SmartDidYouMean {
            kind: DidYouMeanKind::DidYouMean,
            alternative_query: alternative.to_string(),
            original_query: current.map(str::to_string),
        });
    }

    let kind = match query_string.and_then(|q| q.attribute("type"))? {
        "improved" => DidYouMeanKind::Improved,
        "corrected" => DidYouMeanKind::Corrected,
        _ => return None,
    };
    Some(SmartDidYouMean {
        kind,
        alternative_query: current?.to_string(),
        original_query: child_text(query, "originalQuery").map(str::to_string),
    })
}
