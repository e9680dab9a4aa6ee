use std::env;
use std::fs;

use tracing_subscriber::EnvFilter;

use shopsearch_core::config::Config;
use shopsearch_core::policy::use_shop_search;
use shopsearch_core::response::ProductRef;
use shopsearch_core::traits::{FallbackSearch, IdentifierResolver, ResponseParser};
use shopsearch_core::types::{PageKind, QuerySpecification, RequestScope, SearchResult, ShopContext};
use shopsearch_facets::FacetReconstructor;
use shopsearch_query::{ExternalQueryExecutor, ProviderQuery, QueryTranslator};
use shopsearch_response::XmlResponseParser;
use shopsearch_search::{SearchOrchestrator, SearchOutcome};

const USAGE: &str = "Usage: shopsearch <command> [args...]

Commands:
  translate <spec.json> [search|navigation]        print the provider request URLs
  parse <response.xml>                             summarize a provider response
  facets <spec.json> <response.xml>                reconstruct facets as JSON
  search <spec.json> <response.xml> [search|navigation]
                                                   run a full search against a saved response";

/// Answers every query with a saved response body.
struct SavedResponse(String);

impl ExternalQueryExecutor for SavedResponse {
    fn execute(&self, query: &ProviderQuery) -> anyhow::Result<Option<String>> {
        tracing::info!(variant = ?query.variant(), "replaying saved response");
        Ok(Some(self.0.clone()))
    }
}

struct NoShopSearch;

impl FallbackSearch for NoShopSearch {
    fn search(&self, _spec: &QuerySpecification, _context: &ShopContext) -> anyhow::Result<SearchResult> {
        Ok(SearchResult::default())
    }
}

struct ProviderIds;

impl IdentifierResolver for ProviderIds {
    fn resolve(&self, products: &[ProductRef]) -> anyhow::Result<Vec<String>> {
        Ok(products.iter().map(|p| p.id.clone()).collect())
    }
}

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn required<'a>(args: &'a [String], index: usize, what: &str) -> &'a str {
    args.get(index).map(String::as_str).unwrap_or_else(|| {
        eprintln!("Missing {what}\n\n{USAGE}");
        std::process::exit(1)
    })
}

fn page_arg(arg: Option<&String>) -> PageKind {
    match arg.map(String::as_str) {
        Some("navigation") => PageKind::Navigation,
        Some("search") | None => PageKind::Search,
        Some(other) => {
            eprintln!("Unknown page kind '{other}', expected search or navigation");
            std::process::exit(1)
        }
    }
}

fn load_spec(path: &str) -> anyhow::Result<QuerySpecification> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let provider = config.provider()?;
    let context: ShopContext = config.get_optional("shop")?.unwrap_or_default();
    let (cmd, args) = parse_args();

    match cmd.as_str() {
        "translate" => {
            let spec = load_spec(required(&args, 0, "<spec.json>"))?;
            let page = page_arg(args.get(1));
            let translator = QueryTranslator::new(provider.clone());
            let query = translator.translate(&spec, &context, page)?;
            let unfiltered = translator.translate_condition_only(&spec, &context, page)?;
            if use_shop_search(&provider, page) {
                println!("note: this configuration answers {page:?} pages with the shop's own search");
            }
            println!("request: {}", query.request_url(&provider.service_url));
            println!("filters: {}", unfiltered.request_url(&provider.service_url));
        }
        "parse" => {
            let raw = fs::read_to_string(required(&args, 0, "<response.xml>"))?;
            let parsed = XmlResponseParser::new().parse(&raw)?;
            println!("Total count: {}", parsed.total_count);
            let ids: Vec<&str> = parsed.products.iter().map(|p| p.id.as_str()).collect();
            println!("Products ({}): {}", ids.len(), ids.join(", "));
            for filter in &parsed.filters {
                println!("  filter: {}", filter.name());
            }
            if let Some(url) = &parsed.landing_page {
                println!("Landing page: {url}");
            }
            if let Some(promotion) = &parsed.promotion {
                println!("Promotion: {} -> {}", promotion.image, promotion.link);
            }
            if let Some(sdym) = &parsed.smart_did_you_mean {
                println!("Suggestion ({:?}): {}", sdym.kind, sdym.alternative_query);
            }
        }
        "facets" => {
            let spec = load_spec(required(&args, 0, "<spec.json>"))?;
            let raw = fs::read_to_string(required(&args, 1, "<response.xml>"))?;
            let parsed = XmlResponseParser::new().parse(&raw)?;
            let facets = FacetReconstructor::new().reconstruct(&spec, &parsed.filters);
            println!("{}", serde_json::to_string_pretty(&facets)?);
        }
        "search" => {
            let spec = load_spec(required(&args, 0, "<spec.json>"))?;
            let raw = fs::read_to_string(required(&args, 1, "<response.xml>"))?;
            let page = page_arg(args.get(2));
            let scope = RequestScope { page, use_shop_search: use_shop_search(&provider, page) };
            let orchestrator =
                SearchOrchestrator::new(QueryTranslator::new(provider), NoShopSearch, SavedResponse(raw), ProviderIds);
            match orchestrator.search(&spec, &context, scope)? {
                SearchOutcome::Redirect(url) => println!("redirect: {url}"),
                SearchOutcome::Results(result) => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        _ => {
            eprintln!("Unknown command: {}\n\n{USAGE}", cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}
