use shopsearch_core::registry::Supports;
use shopsearch_core::types::{ShopContext, Sorting};

use crate::provider_query::ProviderQuery;

pub trait SortingHandler: Supports<Sorting> + Send + Sync {
    fn contribute(&self, sorting: &Sorting, query: &mut ProviderQuery, context: &ShopContext);
}

fn order_clause(field: &str, sorting: &Sorting) -> String {
    format!("{} {}", field, sorting.direction().as_str())
}

pub struct PopularitySortingHandler;

impl Supports<Sorting> for PopularitySortingHandler {
    fn supports(&self, sorting: &Sorting) -> bool {
        matches!(sorting, Sorting::Popularity { .. })
    }
}

impl SortingHandler for PopularitySortingHandler {
    fn contribute(&self, sorting: &Sorting, query: &mut ProviderQuery, _context: &ShopContext) {
        query.add_order(order_clause("salesfrequency", sorting));
    }
}

pub struct PriceSortingHandler;

impl Supports<Sorting> for PriceSortingHandler {
    fn supports(&self, sorting: &Sorting) -> bool {
        matches!(sorting, Sorting::Price { .. })
    }
}

impl SortingHandler for PriceSortingHandler {
    fn contribute(&self, sorting: &Sorting, query: &mut ProviderQuery, _context: &ShopContext) {
        query.add_order(order_clause("price", sorting));
    }
}

pub struct ProductNameSortingHandler;

impl Supports<Sorting> for ProductNameSortingHandler {
    fn supports(&self, sorting: &Sorting) -> bool {
        matches!(sorting, Sorting::ProductName { .. })
    }
}

impl SortingHandler for ProductNameSortingHandler {
    fn contribute(&self, sorting: &Sorting, query: &mut ProviderQuery, _context: &ShopContext) {
        query.add_order(order_clause("label", sorting));
    }
}

pub struct ReleaseDateSortingHandler;

impl Supports<Sorting> for ReleaseDateSortingHandler {
    fn supports(&self, sorting: &Sorting) -> bool {
        matches!(sorting, Sorting::ReleaseDate { .. })
    }
}

impl SortingHandler for ReleaseDateSortingHandler {
    fn contribute(&self, sorting: &Sorting, query: &mut ProviderQuery, _context: &ShopContext) {
        query.add_order(order_clause("dateadded", sorting));
    }
}

pub fn default_sorting_handlers() -> Vec<Box<dyn SortingHandler>> {
    vec![
        Box::new(PopularitySortingHandler),
        Box::new(PriceSortingHandler),
        Box::new(ProductNameSortingHandler),
        Box::new(ReleaseDateSortingHandler),
    ]
}
