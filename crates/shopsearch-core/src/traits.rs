//! Collaborators the translation layer depends on but does not implement.

use crate::response::{ParsedResponse, ProductRef, Promotion, SmartDidYouMean};
use crate::types::{QuerySpecification, SearchResult, ShopContext};

/// Storage-backed search used whenever the provider is bypassed or silent.
pub trait FallbackSearch: Send + Sync {
    fn search(&self, spec: &QuerySpecification, context: &ShopContext) -> anyhow::Result<SearchResult>;
}

pub trait ResponseParser: Send + Sync {
    fn parse(&self, raw: &str) -> anyhow::Result<ParsedResponse>;
}

/// Maps provider product references to shop product numbers, keeping order.
pub trait IdentifierResolver: Send + Sync {
    fn resolve(&self, products: &[ProductRef]) -> anyhow::Result<Vec<String>>;
}

pub trait RedirectSignal: Send + Sync {
    fn trigger(&self, url: &str);
}

/// Observes whether a call ended on the fallback path.
pub trait FallbackIndicator: Send + Sync {
    fn set(&self, used_fallback: bool);
}

/// Receives response decorations that are not part of the result set.
pub trait SearchListener: Send + Sync {
    fn promotion(&self, _promotion: &Promotion) {}
    fn smart_did_you_mean(&self, _suggestion: &SmartDidYouMean) {}
}

/// Ignores every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Noop;

impl RedirectSignal for Noop {
    fn trigger(&self, _url: &str) {}
}

impl FallbackIndicator for Noop {
    fn set(&self, _used_fallback: bool) {}
}

impl SearchListener for Noop {}
