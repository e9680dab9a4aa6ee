//! Fields extracted from a provider response.

use serde::{Deserialize, Serialize};

use crate::filter::ExternalFilterTree;

/// A product as the provider identifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: String,
}

impl ProductRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DidYouMeanKind {
    DidYouMean,
    Improved,
    Corrected,
}

/// Query rewrite the provider suggested or applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartDidYouMean {
    pub kind: DidYouMeanKind,
    pub alternative_query: String,
    pub original_query: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResponse {
    pub total_count: u64,
    pub products: Vec<ProductRef>,
    pub filters: ExternalFilterTree,
    pub landing_page: Option<String>,
    pub promotion: Option<Promotion>,
    pub smart_did_you_mean: Option<SmartDidYouMean>,
}

impl ParsedResponse {
    /// Nothing to show and nowhere to redirect to.
    pub fn is_empty(&self) -> bool {
        self.landing_page.is_none() && self.total_count == 0 && self.products.is_empty()
    }
}
