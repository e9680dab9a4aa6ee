#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod facet_result;
pub mod filter;
pub mod policy;
pub mod registry;
pub mod response;
pub mod traits;
pub mod types;
