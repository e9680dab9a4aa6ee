//! Engine-agnostic query model handed to the translation layer.
//!
//! A `QuerySpecification` is built upstream and only read here. Conditions
//! are unique by `Condition::name`; re-adding a name replaces the earlier
//! condition in place so insertion order stays stable.

use serde::{Deserialize, Serialize};

use crate::facet_result::PartialFacetResult;

pub const PRICE_FIELD: &str = "price";
pub const CATEGORY_FIELD: &str = "cat";
pub const SEARCH_CONDITION: &str = "search";
pub const CATEGORY_CONDITION: &str = "category";
pub const FORCE_ORIGINAL_QUERY: &str = "forceOriginalQuery";

const PRODUCT_ATTRIBUTE_PREFIX: &str = "product_attribute_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sorting {
    Popularity { direction: SortDirection },
    Price { direction: SortDirection },
    ProductName { direction: SortDirection },
    ReleaseDate { direction: SortDirection },
}

impl Sorting {
    pub fn direction(&self) -> SortDirection {
        match *self {
            Self::Popularity { direction }
            | Self::Price { direction }
            | Self::ProductName { direction }
            | Self::ReleaseDate { direction } => direction,
        }
    }
}

/// Payload carried by attribute conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionValue {
    Scalar(String),
    List(Vec<String>),
    Range { min: Option<f64>, max: Option<f64> },
}

impl ConditionValue {
    /// Discrete values; a range has none.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Scalar(v) => vec![v.as_str()],
            Self::List(vs) => vs.iter().map(String::as_str).collect(),
            Self::Range { .. } => Vec::new(),
        }
    }

    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match *self {
            Self::Range { min, max } => (min, max),
            _ => (None, None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Each path lists category names from the shop root downwards.
    Category { paths: Vec<Vec<String>> },
    /// A `max` of `None` or `0` means no upper bound.
    PriceRange {
        min: f64,
        #[serde(default)]
        max: Option<f64>,
    },
    ProductAttribute { field: String, value: ConditionValue },
    SearchTerm { term: String },
    HasActiveCategory { shop_category_id: u32 },
    Simple { name: String, value: String },
}

impl Condition {
    pub fn name(&self) -> String {
        match self {
            Self::Category { .. } => CATEGORY_CONDITION.to_string(),
            Self::PriceRange { .. } => PRICE_FIELD.to_string(),
            Self::ProductAttribute { field, .. } => format!("{PRODUCT_ATTRIBUTE_PREFIX}{field}"),
            Self::SearchTerm { .. } => SEARCH_CONDITION.to_string(),
            Self::HasActiveCategory { .. } => "has_active_category".to_string(),
            Self::Simple { name, .. } => name.clone(),
        }
    }

    /// Field the condition filters on, which is also the name a synthesized
    /// filter node is given.
    pub fn field(&self) -> &str {
        match self {
            Self::Category { .. } => CATEGORY_FIELD,
            Self::PriceRange { .. } => PRICE_FIELD,
            Self::ProductAttribute { field, .. } => field,
            Self::SearchTerm { .. } => SEARCH_CONDITION,
            Self::HasActiveCategory { .. } => "has_active_category",
            Self::Simple { name, .. } => name,
        }
    }

    /// Numeric bounds for range-like conditions. A price maximum of `0` is
    /// reported as unbounded.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::PriceRange { min, max } => (Some(*min), max.filter(|m| *m > 0.0)),
            Self::ProductAttribute { value, .. } => value.bounds(),
            _ => (None, None),
        }
    }

    /// Discrete values a facet can mark as active.
    pub fn selected_values(&self) -> Vec<String> {
        match self {
            Self::ProductAttribute { value, .. } => value.values().into_iter().map(str::to_string).collect(),
            Self::Simple { value, .. } => vec![value.clone()],
            Self::Category { paths } => paths.iter().map(|p| p.join("_")).collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_price(&self) -> bool {
        matches!(self, Self::PriceRange { .. })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOrigin {
    /// Set by the shop itself (e.g. the current category of a listing).
    Base,
    /// Chosen by the shopper through a filter.
    #[default]
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecifiedCondition {
    #[serde(flatten)]
    pub condition: Condition,
    #[serde(default)]
    pub origin: ConditionOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetMode {
    LabelList,
    RadioList,
    ValueList,
    RangeResult,
}

/// A facet the caller wants reflected in the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    pub field: String,
    pub mode: FacetMode,
    pub label: String,
    pub form_field_name: String,
}

impl Facet {
    pub fn product_attribute(
        field: impl Into<String>,
        mode: FacetMode,
        form_field_name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        let field = field.into();
        Self {
            name: format!("{PRODUCT_ATTRIBUTE_PREFIX}{field}"),
            field,
            mode,
            label: label.into(),
            form_field_name: form_field_name.into(),
        }
    }

    pub fn price(label: impl Into<String>) -> Self {
        Self {
            name: PRICE_FIELD.to_string(),
            field: PRICE_FIELD.to_string(),
            mode: FacetMode::RangeResult,
            label: label.into(),
            form_field_name: PRICE_FIELD.to_string(),
        }
    }

    pub fn is_price(&self) -> bool {
        self.name == PRICE_FIELD || self.field == PRICE_FIELD
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SpecificationDocument")]
pub struct QuerySpecification {
    conditions: Vec<SpecifiedCondition>,
    sortings: Vec<Sorting>,
    facets: Vec<Facet>,
    offset: usize,
    limit: Option<usize>,
    fetch_count: bool,
}

impl Default for QuerySpecification {
    fn default() -> Self {
        Self { conditions: Vec::new(), sortings: Vec::new(), facets: Vec::new(), offset: 0, limit: None, fetch_count: true }
    }
}

impl QuerySpecification {
    pub fn new() -> Self { Self::default() }

    /// Adds a shopper-supplied condition.
    pub fn add_condition(&mut self, condition: Condition) -> &mut Self {
        self.insert_condition(condition, ConditionOrigin::User)
    }

    pub fn add_base_condition(&mut self, condition: Condition) -> &mut Self {
        self.insert_condition(condition, ConditionOrigin::Base)
    }

    fn insert_condition(&mut self, condition: Condition, origin: ConditionOrigin) -> &mut Self {
        let name = condition.name();
        let entry = SpecifiedCondition { condition, origin };
        match self.conditions.iter_mut().find(|c| c.condition.name() == name) {
            Some(existing) => *existing = entry,
            None => self.conditions.push(entry),
        }
        self
    }

    pub fn add_sorting(&mut self, sorting: Sorting) -> &mut Self {
        self.sortings.push(sorting);
        self
    }

    /// Facets are unique by name; re-adding replaces in place.
    pub fn add_facet(&mut self, facet: Facet) -> &mut Self {
        match self.facets.iter_mut().find(|f| f.name == facet.name) {
            Some(existing) => *existing = facet,
            None => self.facets.push(facet),
        }
        self
    }

    pub fn set_offset(&mut self, offset: usize) -> &mut Self {
        self.offset = offset;
        self
    }

    pub fn set_limit(&mut self, limit: Option<usize>) -> &mut Self {
        self.limit = limit;
        self
    }

    pub fn set_fetch_count(&mut self, fetch_count: bool) -> &mut Self {
        self.fetch_count = fetch_count;
        self
    }

    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter().map(|c| &c.condition)
    }

    pub fn condition(&self, name: &str) -> Option<&Condition> {
        self.conditions().find(|c| c.name() == name)
    }

    pub fn user_condition(&self, name: &str) -> Option<&Condition> {
        self.conditions
            .iter()
            .find(|c| c.origin == ConditionOrigin::User && c.condition.name() == name)
            .map(|c| &c.condition)
    }

    pub fn has_user_condition(&self, name: &str) -> bool { self.user_condition(name).is_some() }

    pub fn sortings(&self) -> &[Sorting] { &self.sortings }

    pub fn facets(&self) -> &[Facet] { &self.facets }

    pub fn offset(&self) -> usize { self.offset }

    pub fn limit(&self) -> Option<usize> { self.limit }

    pub fn fetch_count(&self) -> bool { self.fetch_count }
}

/// Serialized form of a specification, e.g. a JSON file fed to the CLI.
#[derive(Debug, Deserialize)]
struct SpecificationDocument {
    #[serde(default)]
    conditions: Vec<SpecifiedCondition>,
    #[serde(default)]
    sortings: Vec<Sorting>,
    #[serde(default)]
    facets: Vec<Facet>,
    #[serde(default)]
    offset: usize,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default = "default_fetch_count")]
    fetch_count: bool,
}

fn default_fetch_count() -> bool { true }

impl From<SpecificationDocument> for QuerySpecification {
    fn from(doc: SpecificationDocument) -> Self {
        let mut spec = Self::new();
        for entry in doc.conditions {
            spec.insert_condition(entry.condition, entry.origin);
        }
        for sorting in doc.sortings {
            spec.add_sorting(sorting);
        }
        for facet in doc.facets {
            spec.add_facet(facet);
        }
        spec.set_offset(doc.offset).set_limit(doc.limit).set_fetch_count(doc.fetch_count);
        spec
    }
}

/// Which storefront page issued the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Search,
    Navigation,
    #[default]
    Other,
}

/// Shop and customer state the translation depends on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopContext {
    pub customer_group_key: Option<String>,
    pub shop_url: String,
    pub user_ip: Option<String>,
}

impl ShopContext {
    pub fn customer_group_key(&self) -> Option<&str> {
        self.customer_group_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Per-request decisions made outside the core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestScope {
    pub page: PageKind,
    pub use_shop_search: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total_count: u64,
    pub products: Vec<String>,
    pub facets: Vec<PartialFacetResult>,
}

impl SearchResult {
    pub fn new(products: Vec<String>, total_count: u64, facets: Vec<PartialFacetResult>) -> Self {
        Self { total_count, products, facets }
    }
}
