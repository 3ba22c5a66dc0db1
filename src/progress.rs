// src/progress.rs
use crate::model::{CheckResult, ListingCheck};

/// Progress reporting for a checking run.
/// Frontends implement this to surface status to users; the console
/// implementation lives in `report::ConsoleProgress`.
pub trait Progress {
    /// Called once the table is loaded, with the number of rows to check.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after each row is checked, in input order.
    fn item_done(&mut self, _check: &ListingCheck, _result: &CheckResult) {}

    /// Called at the end of a completed run.
    fn finish(&mut self, _summary: &crate::runner::RunSummary) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
