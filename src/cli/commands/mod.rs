//! CLI command implementations.

pub mod fetch;
pub mod run;
pub mod validate;
