#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod conditions;
pub mod provider_query;
pub mod sortings;
pub mod translator;
pub mod usergroup;

pub use provider_query::{AttributeFilter, ExternalQueryExecutor, ProviderQuery, QueryVariant};
pub use translator::QueryTranslator;
