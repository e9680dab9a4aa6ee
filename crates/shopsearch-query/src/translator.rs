use shopsearch_core::config::ProviderConfig;
use shopsearch_core::error::{Error, Result};
use shopsearch_core::registry::HandlerRegistry;
use shopsearch_core::types::{
    Condition, PageKind, QuerySpecification, ShopContext, CATEGORY_CONDITION, SEARCH_CONDITION,
};

use crate::conditions::{default_condition_handlers, ConditionHandler};
use crate::provider_query::{ProviderQuery, QueryVariant};
use crate::sortings::{default_sorting_handlers, SortingHandler};

/// Turns a shop query specification into a provider query.
///
/// Handler registries are fixed at construction. Conditions and sortings no
/// handler supports are skipped.
pub struct QueryTranslator {
    config: ProviderConfig,
    conditions: HandlerRegistry<dyn ConditionHandler>,
    sortings: HandlerRegistry<dyn SortingHandler>,
}

impl QueryTranslator {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_handlers(config, default_condition_handlers(), default_sorting_handlers())
    }

    pub fn with_handlers(
        config: ProviderConfig,
        conditions: Vec<Box<dyn ConditionHandler>>,
        sortings: Vec<Box<dyn SortingHandler>>,
    ) -> Self {
        Self {
            config,
            conditions: HandlerRegistry::new(conditions),
            sortings: HandlerRegistry::new(sortings),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Empty query for the page, already scoped to the shopper's customer group.
    pub fn scoped_query(&self, context: &ShopContext, page: PageKind) -> Result<ProviderQuery> {
        let group = context.customer_group_key().ok_or(Error::MissingCustomerGroup)?;
        let mut query = ProviderQuery::new(QueryVariant::for_page(page), &self.config, context);
        query.add_user_group(group);
        Ok(query)
    }

    /// Conditions only; no sorting and no pagination.
    pub fn translate_conditions(
        &self,
        spec: &QuerySpecification,
        context: &ShopContext,
        page: PageKind,
    ) -> Result<ProviderQuery> {
        let mut query = self.scoped_query(context, page)?;
        for condition in spec.conditions() {
            self.apply_condition(condition, &mut query, context);
        }
        Ok(query)
    }

    /// Conditions and sortings, sortings appended in specification order.
    pub fn translate_with_sorting(
        &self,
        spec: &QuerySpecification,
        context: &ShopContext,
        page: PageKind,
    ) -> Result<ProviderQuery> {
        let mut query = self.translate_conditions(spec, context, page)?;
        for sorting in spec.sortings() {
            match self.sortings.resolve(sorting) {
                Some(handler) => handler.contribute(sorting, &mut query, context),
                None => tracing::debug!(?sorting, "no provider mapping for sorting, skipped"),
            }
        }
        Ok(query)
    }

    /// Full product query: conditions, sortings and pagination.
    ///
    /// An offset of 0 with a limit of 1 is treated as an existence check and
    /// sent without a limit.
    pub fn translate(&self, spec: &QuerySpecification, context: &ShopContext, page: PageKind) -> Result<ProviderQuery> {
        let mut query = self.translate_with_sorting(spec, context, page)?;
        query.set_first_result(spec.offset());
        let existence_check = spec.offset() == 0 && spec.limit() == Some(1);
        query.set_max_results(if existence_check { None } else { spec.limit() });
        Ok(query)
    }

    /// Query carrying only the page's primary condition: the search term on
    /// search pages, the category elsewhere. Used to fetch the unfiltered
    /// filter tree.
    pub fn translate_condition_only(
        &self,
        spec: &QuerySpecification,
        context: &ShopContext,
        page: PageKind,
    ) -> Result<ProviderQuery> {
        let mut query = self.scoped_query(context, page)?;
        let primary = match page {
            PageKind::Search => SEARCH_CONDITION,
            PageKind::Navigation | PageKind::Other => CATEGORY_CONDITION,
        };
        if let Some(condition) = spec.condition(primary) {
            self.apply_condition(condition, &mut query, context);
        }
        Ok(query)
    }

    fn apply_condition(&self, condition: &Condition, query: &mut ProviderQuery, context: &ShopContext) {
        match self.conditions.resolve(condition) {
            Some(handler) => handler.contribute(condition, query, context),
            None => tracing::debug!(condition = %condition.name(), "no provider mapping for condition, skipped"),
        }
    }
}
