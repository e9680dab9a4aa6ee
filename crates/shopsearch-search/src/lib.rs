#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod orchestrator;

pub use orchestrator::{SearchOrchestrator, SearchOutcome};
