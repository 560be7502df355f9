pub mod analysis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod lang;
pub mod reporting;
pub mod rules;
pub mod types;
