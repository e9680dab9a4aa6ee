#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod handlers;
pub mod reconstruct;
pub mod synthesize;

pub use reconstruct::FacetReconstructor;
