// src/reporting/mod.rs
pub mod console;
pub mod guidance;
pub mod json;
mod shared;
