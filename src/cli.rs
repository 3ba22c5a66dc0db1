// src/cli.rs
use std::io::{self, Write};

use crate::{
    config::{RunOptions, consts::INPUT_FAILED},
    error::CheckError,
    input,
    report::ConsoleProgress,
    runner::{self, RunSummary},
};

/// Interactive entry point: ask for the file, run, print as we go.
pub fn run() -> color_eyre::Result<RunSummary> {
    let file_name = input::prompt_file_name(io::stdin().lock(), io::stdout())?;

    let opts = RunOptions::from_env(file_name);
    crate::log::init(&opts.log_path());
    logf!("Run start: input {}, policy {:?}", opts.input_path().display(), opts.on_nav_error);

    let rt = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    let mut progress = ConsoleProgress::stdout(&opts.report);
    let summary = rt.block_on(runner::run(&opts, &mut progress))?;
    Ok(summary)
}

/// What the user sees when a run stops. Anything about the input file gets the
/// same generic line, missing or malformed alike.
pub fn failure_message(err: &color_eyre::Report) -> String {
    match err.downcast_ref::<CheckError>() {
        Some(e) if e.is_input() => s!(INPUT_FAILED),
        Some(CheckError::Browser { message }) => format!("Browser error: {message}"),
        Some(CheckError::Navigation { url, message }) => format!("Navigation error at {url}: {message}"),
        Some(CheckError::Output { path, source }) => {
            format!("Report cannot be written: {}: {source}", path.display())
        }
        _ => format!("Run failed: {err}"),
    }
}

/// Print the fatal line on the same stream as the per-record lines.
pub fn report_failure<W: Write>(mut out: W, err: &color_eyre::Report) {
    loge!("Run failed: {err:?}");
    let _ = writeln!(out, "{}", failure_message(err));
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn input_errors_share_one_message() {
        let missing: color_eyre::Report = CheckError::Input {
            path: PathBuf::from("csv/nope.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        }
        .into();
        let bad: color_eyre::Report =
            CheckError::Parse { path: PathBuf::from("csv/bad.csv"), message: s!("x") }.into();
        assert_eq!(failure_message(&missing), INPUT_FAILED);
        assert_eq!(failure_message(&bad), INPUT_FAILED);
    }

    #[test]
    fn navigation_error_names_the_url() {
        let e: color_eyre::Report = CheckError::navigation("http://x/9", "timeout").into();
        assert_eq!(failure_message(&e), "Navigation error at http://x/9: timeout");
    }

    #[test]
    fn fatal_line_lands_on_the_console_stream() {
        let e: color_eyre::Report = CheckError::Input {
            path: PathBuf::from("csv/nope.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        }
        .into();
        let mut out = Vec::new();
        report_failure(&mut out, &e);
        assert_eq!(String::from_utf8(out).unwrap(), "File cannot be accessed! :(\n");
    }
}
