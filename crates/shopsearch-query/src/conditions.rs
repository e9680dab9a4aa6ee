//! Condition handlers: each one maps a kind of shop condition onto provider
//! query contributions.

use shopsearch_core::registry::Supports;
use shopsearch_core::types::{Condition, ConditionValue, ShopContext, PRICE_FIELD};

use crate::provider_query::ProviderQuery;

pub trait ConditionHandler: Supports<Condition> + Send + Sync {
    fn contribute(&self, condition: &Condition, query: &mut ProviderQuery, context: &ShopContext);
}

/// Provider category name for a path of shop category names: trimmed
/// segments joined with `_`, blank segments dropped.
pub fn build_category_name(path: &[String]) -> String {
    path.iter()
        .map(|segment| segment.trim())
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

pub struct CategoryConditionHandler;

impl Supports<Condition> for CategoryConditionHandler {
    fn supports(&self, condition: &Condition) -> bool {
        matches!(condition, Condition::Category { .. })
    }
}

impl ConditionHandler for CategoryConditionHandler {
    fn contribute(&self, condition: &Condition, query: &mut ProviderQuery, _context: &ShopContext) {
        if let Condition::Category { paths } = condition {
            let names = paths
                .iter()
                .map(|p| build_category_name(p))
                .filter(|name| !name.is_empty());
            query.add_categories(names);
        }
    }
}

pub struct PriceConditionHandler;

impl Supports<Condition> for PriceConditionHandler {
    fn supports(&self, condition: &Condition) -> bool {
        condition.is_price()
    }
}

impl ConditionHandler for PriceConditionHandler {
    fn contribute(&self, condition: &Condition, query: &mut ProviderQuery, _context: &ShopContext) {
        let (min, max) = condition.bounds();
        query.add_attribute_range(PRICE_FIELD, min, max);
    }
}

pub struct ProductAttributeConditionHandler;

impl Supports<Condition> for ProductAttributeConditionHandler {
    fn supports(&self, condition: &Condition) -> bool {
        matches!(condition, Condition::ProductAttribute { .. })
    }
}

impl ConditionHandler for ProductAttributeConditionHandler {
    fn contribute(&self, condition: &Condition, query: &mut ProviderQuery, _context: &ShopContext) {
        let Condition::ProductAttribute { field, value } = condition else {
            return;
        };
        match value {
            ConditionValue::Range { min, max } => query.add_attribute_range(field, *min, *max),
            other => query.add_attribute_values(field, other.values().into_iter().map(str::to_string)),
        }
    }
}

pub struct SearchTermConditionHandler;

impl Supports<Condition> for SearchTermConditionHandler {
    fn supports(&self, condition: &Condition) -> bool {
        matches!(condition, Condition::SearchTerm { .. })
    }
}

impl ConditionHandler for SearchTermConditionHandler {
    fn contribute(&self, condition: &Condition, query: &mut ProviderQuery, _context: &ShopContext) {
        if let Condition::SearchTerm { term } = condition {
            query.set_query(term.clone());
        }
    }
}

/// Forwards named flags (e.g. `forceOriginalQuery`) as plain request
/// parameters.
pub struct SimpleConditionHandler;

impl Supports<Condition> for SimpleConditionHandler {
    fn supports(&self, condition: &Condition) -> bool {
        matches!(condition, Condition::Simple { .. })
    }
}

impl ConditionHandler for SimpleConditionHandler {
    fn contribute(&self, condition: &Condition, query: &mut ProviderQuery, _context: &ShopContext) {
        if let Condition::Simple { name, value } = condition {
            query.add_parameter(name.clone(), value.clone());
        }
    }
}

pub fn default_condition_handlers() -> Vec<Box<dyn ConditionHandler>> {
    vec![
        Box::new(CategoryConditionHandler),
        Box::new(PriceConditionHandler),
        Box::new(ProductAttributeConditionHandler),
        Box::new(SearchTermConditionHandler),
        Box::new(SimpleConditionHandler),
    ]
}
