// src/report.rs
//! Console lines and the end-of-run failure file.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::ReportOptions;
use crate::error::CheckError;
use crate::model::{CheckResult, Failure, ListingCheck};
use crate::progress::Progress;
use crate::runner::RunSummary;
use crate::validate::is_wrong_url;

pub const SUCCESS_BADGE: &str = "SUCCESS\t";
pub const ERROR_BADGE: &str = "ERROR\t";

/// Console text for one row, without the badge.
///
/// - success: `<url>`
/// - wrong page: `<name> couldn't be accessed at <url>!`
/// - anything else: `<url> - <reason><sep><reason>...`
pub fn console_line(check: &ListingCheck, result: &CheckResult, sep: &str) -> String {
    match result {
        CheckResult::Success => check.url.clone(),
        CheckResult::Failure(f) if is_wrong_url(f) => {
            format!("{} couldn't be accessed at {}!", check.front_face_name, f.url)
        }
        CheckResult::Failure(f) => format!("{} - {}", f.url, f.reasons.join(sep)),
    }
}

/// One report file line: `<url><sep><reason>[<sep><reason>...]`.
pub fn failure_line(failure: &Failure, sep: &str) -> String {
    let mut line = failure.url.clone();
    for r in &failure.reasons {
        line.push_str(sep);
        line.push_str(r);
    }
    line
}

/// Whole report body: one line per failure, newline-joined, no trailing newline.
pub fn render_failures(failures: &[Failure], sep: &str) -> String {
    failures
        .iter()
        .map(|f| failure_line(f, sep))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the report, creating `result/` if needed and overwriting any old file.
/// An empty failure list still produces an (empty) file.
pub async fn write_failures(path: &Path, failures: &[Failure], sep: &str) -> Result<(), CheckError> {
    let out_err = |source: io::Error| CheckError::Output { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(out_err)?;
        }
    }
    tokio::fs::write(path, render_failures(failures, sep)).await.map_err(out_err)?;
    logf!("Wrote {} failure line(s) to {}", failures.len(), path.display());
    Ok(())
}

/// Colored console sink. Writes to stdout unless given another writer.
pub struct ConsoleProgress<W: Write = io::Stdout> {
    out: W,
    sep: String,
}

impl ConsoleProgress {
    pub fn stdout(opts: &ReportOptions) -> Self {
        Self::new(io::stdout(), opts)
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W, opts: &ReportOptions) -> Self {
        Self { out, sep: opts.console_sep.clone() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn log(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{msg}");
    }

    fn item_done(&mut self, check: &ListingCheck, result: &CheckResult) {
        let badge = if result.is_success() {
            SUCCESS_BADGE.on_green()
        } else {
            ERROR_BADGE.on_red()
        };
        let _ = writeln!(self.out, "{badge} {}", console_line(check, result, &self.sep));
    }

    fn finish(&mut self, summary: &RunSummary) {
        let _ = writeln!(
            self.out,
            "Checked {} listing(s), {} failed. Report: {}",
            summary.total,
            summary.failures,
            summary.report_path.display()
        );
    }
}
