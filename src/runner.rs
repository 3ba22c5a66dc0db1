// src/runner.rs
use std::path::PathBuf;

use crate::{
    browser::{BrowserSession, Navigator},
    config::{NavFailurePolicy, RunOptions, consts::{READ_OK, REASON_NAV_PREFIX}},
    error::CheckError,
    input,
    model::{CheckResult, Failure, ListingCheck},
    progress::Progress,
    report,
    validate::validate,
};

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub failures: usize,
    pub report_path: PathBuf,
}

/// Top-level runner: load the table, launch the browser, check every row,
/// then write the report and close the browser side by side.
pub async fn run(opts: &RunOptions, progress: &mut dyn Progress) -> Result<RunSummary, CheckError> {
    let checks = input::load_checks(&opts.input_path()).await?;
    progress.log(READ_OK);

    let session = BrowserSession::open(&opts.browser).await?;
    run_session(opts, &checks, session, progress).await
}

/// Everything after the table is loaded and the navigator is open.
///
/// The navigator is closed on every path out of here. On a clean loop the
/// report write and the close run concurrently and both are awaited; a write
/// error is returned, a close error is only logged. On an aborted loop no
/// report is written.
pub async fn run_session<N: Navigator>(
    opts: &RunOptions,
    checks: &[ListingCheck],
    mut nav: N,
    progress: &mut dyn Progress,
) -> Result<RunSummary, CheckError> {
    progress.begin(checks.len());

    let failures = match run_checks(checks, &mut nav, opts.on_nav_error, progress).await {
        Ok(f) => f,
        Err(e) => {
            loge!("Run aborted: {e}");
            if let Err(close_err) = nav.close().await {
                loge!("{close_err}");
            }
            return Err(e);
        }
    };

    let report_path = opts.report_path();
    let (written, closed) = tokio::join!(
        report::write_failures(&report_path, &failures, &opts.report.file_sep),
        nav.close(),
    );
    if let Err(e) = closed {
        logw!("Ignoring close failure after a completed run: {e}");
    }
    written?;

    let summary = RunSummary { total: checks.len(), failures: failures.len(), report_path };
    logf!("Run done: {} checked, {} failed", summary.total, summary.failures);
    progress.finish(&summary);
    Ok(summary)
}

/// Check rows strictly in input order, one navigation at a time.
/// Returns the failures in the same order.
pub async fn run_checks<N: Navigator>(
    checks: &[ListingCheck],
    nav: &mut N,
    policy: NavFailurePolicy,
    progress: &mut dyn Progress,
) -> Result<Vec<Failure>, CheckError> {
    let mut failures = Vec::new();

    for check in checks {
        let result = match nav.fetch_title(&check.url).await {
            Ok(title) => validate(&title, check),
            Err(e) => match policy {
                NavFailurePolicy::Abort => return Err(e),
                NavFailurePolicy::Record => {
                    logw!("{e}");
                    CheckResult::Failure(Failure {
                        url: check.url.clone(),
                        reasons: vec![nav_reason(&e)],
                    })
                }
            },
        };

        progress.item_done(check, &result);
        if let Some(f) = result.failure() {
            failures.push(f);
        }
    }

    Ok(failures)
}

fn nav_reason(e: &CheckError) -> String {
    match e {
        CheckError::Navigation { message, .. } => join!(REASON_NAV_PREFIX, message),
        other => join!(REASON_NAV_PREFIX, &other.to_string()),
    }
}
