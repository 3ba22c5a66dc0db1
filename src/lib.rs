// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod model;

pub mod browser;
pub mod cli;
pub mod input;
pub mod progress;
pub mod report;
pub mod runner;
pub mod validate;

pub use error::CheckError;
pub use model::{CheckResult, Failure, ListingCheck};
