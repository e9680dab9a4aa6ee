//! Product search entry point: decides between the external provider and the
//! shop's own search and assembles the result.

use tracing::{debug, info, warn};

use shopsearch_core::error::Result;
use shopsearch_core::response::ParsedResponse;
use shopsearch_core::traits::{
    FallbackIndicator, FallbackSearch, IdentifierResolver, Noop, RedirectSignal, ResponseParser, SearchListener,
};
use shopsearch_core::types::{QuerySpecification, RequestScope, SearchResult, ShopContext};
use shopsearch_facets::FacetReconstructor;
use shopsearch_query::{ExternalQueryExecutor, ProviderQuery, QueryTranslator};
use shopsearch_response::XmlResponseParser;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Results(SearchResult),
    /// The provider matched a landing page; no products are returned.
    Redirect(String),
}

pub struct SearchOrchestrator<F, E, R>
where
    F: FallbackSearch,
    E: ExternalQueryExecutor,
    R: IdentifierResolver,
{
    translator: QueryTranslator,
    reconstructor: FacetReconstructor,
    fallback: F,
    executor: E,
    resolver: R,
    parser: Box<dyn ResponseParser>,
    redirect: Box<dyn RedirectSignal>,
    indicator: Box<dyn FallbackIndicator>,
    listener: Box<dyn SearchListener>,
}

impl<F, E, R> SearchOrchestrator<F, E, R>
where
    F: FallbackSearch,
    E: ExternalQueryExecutor,
    R: IdentifierResolver,
{
    pub fn new(translator: QueryTranslator, fallback: F, executor: E, resolver: R) -> Self {
        Self {
            translator,
            reconstructor: FacetReconstructor::new(),
            fallback,
            executor,
            resolver,
            parser: Box::new(XmlResponseParser::new()),
            redirect: Box::new(Noop),
            indicator: Box::new(Noop),
            listener: Box::new(Noop),
        }
    }

    pub fn with_reconstructor(mut self, reconstructor: FacetReconstructor) -> Self {
        self.reconstructor = reconstructor;
        self
    }

    pub fn with_parser(mut self, parser: Box<dyn ResponseParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_redirect(mut self, redirect: Box<dyn RedirectSignal>) -> Self {
        self.redirect = redirect;
        self
    }

    pub fn with_indicator(mut self, indicator: Box<dyn FallbackIndicator>) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn with_listener(mut self, listener: Box<dyn SearchListener>) -> Self {
        self.listener = listener;
        self
    }

    /// Runs one search.
    ///
    /// When the provider is bypassed (no count requested, or the caller chose
    /// shop search) the fallback result is returned untouched and the
    /// fallback indicator is not signalled. Otherwise the indicator is set
    /// exactly once: `true` when the provider gave nothing usable, `false`
    /// when its answer is used.
    pub fn search(&self, spec: &QuerySpecification, context: &ShopContext, scope: RequestScope) -> Result<SearchOutcome> {
        if !spec.fetch_count() || scope.use_shop_search {
            debug!(fetch_count = spec.fetch_count(), use_shop_search = scope.use_shop_search, "provider bypassed");
            return Ok(SearchOutcome::Results(self.fallback.search(spec, context)?));
        }

        let query = self.translator.translate(spec, context, scope.page)?;
        let Some(response) = self.fetch(&query) else {
            info!(page = ?scope.page, "provider gave no usable answer, using shop search");
            self.indicator.set(true);
            return Ok(SearchOutcome::Results(self.fallback.search(spec, context)?));
        };
        self.indicator.set(false);

        if let Some(url) = response.landing_page {
            info!(%url, "provider matched a landing page");
            self.redirect.trigger(&url);
            return Ok(SearchOutcome::Redirect(url));
        }

        if let Some(promotion) = &response.promotion {
            self.listener.promotion(promotion);
        }
        if let Some(suggestion) = &response.smart_did_you_mean {
            self.listener.smart_did_you_mean(suggestion);
        }

        let products = self.resolver.resolve(&response.products)?;
        let facets = self.reconstructor.reconstruct(spec, &response.filters);
        Ok(SearchOutcome::Results(SearchResult::new(products, response.total_count, facets)))
    }

    /// `None` for every outcome that sends the request to the fallback.
    fn fetch(&self, query: &ProviderQuery) -> Option<ParsedResponse> {
        let raw = match self.executor.execute(query) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                debug!("provider returned an empty body");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "provider request failed");
                return None;
            }
        };
        match self.parser.parse(&raw) {
            Ok(parsed) if parsed.is_empty() => {
                debug!("provider returned no hits");
                None
            }
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(error = %err, "provider response could not be parsed");
                None
            }
        }
    }
}
