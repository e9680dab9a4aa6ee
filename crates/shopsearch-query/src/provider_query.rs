//! The provider's native query, accumulated by condition and sorting handlers.
//!
//! Every `add_*` call appends; nothing a handler contributes can be removed
//! by another. Repeating an identical contribution leaves the query
//! unchanged, which keeps handlers idempotent.

use serde::Serialize;

use shopsearch_core::config::ProviderConfig;
use shopsearch_core::types::{PageKind, ShopContext};

use crate::usergroup::user_group_hash;

pub const OUTPUT_ADAPTER: &str = "XML_2.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryVariant {
    Search,
    Navigation,
}

impl QueryVariant {
    pub fn for_page(page: PageKind) -> Self {
        match page {
            PageKind::Search => Self::Search,
            PageKind::Navigation | PageKind::Other => Self::Navigation,
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Search => "index.php",
            Self::Navigation => "selector.php",
        }
    }

    fn category_parameter(self) -> &'static str {
        match self {
            Self::Search => "attrib[cat][]",
            Self::Navigation => "selected[cat][]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttributeFilter {
    Values { name: String, values: Vec<String> },
    Range { name: String, min: Option<f64>, max: Option<f64> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderQuery {
    variant: QueryVariant,
    shop_key: String,
    shop_url: String,
    user_ip: Option<String>,
    revision: String,
    user_group_hashes: Vec<String>,
    query: Option<String>,
    categories: Vec<String>,
    attributes: Vec<AttributeFilter>,
    orders: Vec<String>,
    parameters: Vec<(String, String)>,
    first_result: usize,
    max_results: Option<usize>,
}

impl ProviderQuery {
    pub fn new(variant: QueryVariant, config: &ProviderConfig, context: &ShopContext) -> Self {
        Self {
            variant,
            shop_key: config.shop_key.clone(),
            shop_url: context.shop_url.clone(),
            user_ip: context.user_ip.clone(),
            revision: config.revision.clone(),
            user_group_hashes: Vec::new(),
            query: None,
            categories: Vec::new(),
            attributes: Vec::new(),
            orders: Vec::new(),
            parameters: Vec::new(),
            first_result: 0,
            max_results: None,
        }
    }

    /// Scopes results to a customer group. The provider receives the group
    /// key obfuscated with the shop key.
    pub fn add_user_group(&mut self, customer_group_key: &str) {
        let hash = user_group_hash(&self.shop_key, customer_group_key);
        push_unique(&mut self.user_group_hashes, hash);
    }

    pub fn set_query(&mut self, term: impl Into<String>) {
        self.query = Some(term.into());
    }

    pub fn add_categories<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        for name in names {
            push_unique(&mut self.categories, name);
        }
    }

    pub fn add_attribute_values<I>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        let existing = self.attributes.iter_mut().find_map(|a| match a {
            AttributeFilter::Values { name: n, values } if n == name => Some(values),
            _ => None,
        });
        match existing {
            Some(current) => values.into_iter().for_each(|v| push_unique(current, v)),
            None => {
                let mut collected = Vec::new();
                values.into_iter().for_each(|v| push_unique(&mut collected, v));
                self.attributes.push(AttributeFilter::Values { name: name.to_string(), values: collected });
            }
        }
    }

    pub fn add_attribute_range(&mut self, name: &str, min: Option<f64>, max: Option<f64>) {
        push_unique(&mut self.attributes, AttributeFilter::Range { name: name.to_string(), min, max });
    }

    /// Appends an order clause after the ones already present.
    pub fn add_order(&mut self, clause: impl Into<String>) {
        push_unique(&mut self.orders, clause.into());
    }

    pub fn add_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        push_unique(&mut self.parameters, (key.into(), value.into()));
    }

    pub fn set_first_result(&mut self, first: usize) {
        self.first_result = first;
    }

    /// `None` lifts the limit entirely.
    pub fn set_max_results(&mut self, max: Option<usize>) {
        self.max_results = max;
    }

    pub fn variant(&self) -> QueryVariant { self.variant }
    pub fn user_group_hashes(&self) -> &[String] { &self.user_group_hashes }
    pub fn query(&self) -> Option<&str> { self.query.as_deref() }
    pub fn categories(&self) -> &[String] { &self.categories }
    pub fn attributes(&self) -> &[AttributeFilter] { &self.attributes }
    pub fn orders(&self) -> &[String] { &self.orders }
    pub fn parameters(&self) -> &[(String, String)] { &self.parameters }
    pub fn first_result(&self) -> usize { self.first_result }
    pub fn max_results(&self) -> Option<usize> { self.max_results }

    /// Request parameters in the order the provider documents them.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("outputAdapter".to_string(), OUTPUT_ADAPTER.to_string()),
            ("shopkey".to_string(), self.shop_key.clone()),
            ("shopurl".to_string(), self.shop_url.clone()),
        ];
        if let Some(ip) = &self.user_ip {
            pairs.push(("userip".to_string(), ip.clone()));
        }
        pairs.push(("revision".to_string(), self.revision.clone()));
        match (&self.query, self.variant) {
            (Some(q), _) => pairs.push(("query".to_string(), q.clone())),
            (None, QueryVariant::Search) => pairs.push(("query".to_string(), String::new())),
            (None, QueryVariant::Navigation) => {}
        }
        for hash in &self.user_group_hashes {
            pairs.push(("usergrouphash".to_string(), hash.clone()));
        }
        for category in &self.categories {
            pairs.push((self.variant.category_parameter().to_string(), category.clone()));
        }
        for attribute in &self.attributes {
            match attribute {
                AttributeFilter::Values { name, values } => {
                    for value in values {
                        pairs.push((format!("attrib[{name}][]"), value.clone()));
                    }
                }
                AttributeFilter::Range { name, min, max } => {
                    if let Some(min) = min {
                        pairs.push((format!("attrib[{name}][min]"), min.to_string()));
                    }
                    if let Some(max) = max {
                        pairs.push((format!("attrib[{name}][max]"), max.to_string()));
                    }
                }
            }
        }
        for order in &self.orders {
            pairs.push(("order".to_string(), order.clone()));
        }
        pairs.extend(self.parameters.iter().cloned());
        pairs.push(("first".to_string(), self.first_result.to_string()));
        if let Some(count) = self.max_results {
            pairs.push(("count".to_string(), count.to_string()));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn request_url(&self, service_url: &str) -> String {
        let base = service_url.trim_end_matches('/');
        format!("{}/{}?{}", base, self.variant.endpoint(), self.to_query_string())
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Performs the provider round trip. `Ok(None)` means the provider answered
/// with nothing usable; transport details stay behind this trait.
pub trait ExternalQueryExecutor: Send + Sync {
    fn execute(&self, query: &ProviderQuery) -> anyhow::Result<Option<String>>;
}
