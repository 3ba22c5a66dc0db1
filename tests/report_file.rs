// tests/report_file.rs
//
// Report file writing on its own.
//
use std::fs;

use mint_check::error::CheckError;
use mint_check::model::Failure;
use mint_check::report::write_failures;

mod common;

fn failure(url: &str, reasons: &[&str]) -> Failure {
    Failure { url: url.into(), reasons: reasons.iter().map(|r| r.to_string()).collect() }
}

#[tokio::test]
async fn creates_result_dir_and_writes_lines() {
    let base = common::tmp_dir("report_dir");
    let path = base.join("result").join("cards.csv");
    let fs_ = vec![
        failure("http://x/1", &["Card is not foil", "Card is not Showcase"]),
        failure("http://x/2", &["Wrong URL"]),
    ];

    write_failures(&path, &fs_, ",").await.unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "http://x/1,Card is not foil,Card is not Showcase\nhttp://x/2,Wrong URL");
}

#[tokio::test]
async fn custom_separator_is_used() {
    let base = common::tmp_dir("report_sep");
    let path = base.join("out.txt");
    write_failures(&path, &[failure("u", &["a", "b"])], ";").await.unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "u;a;b");
}

#[tokio::test]
async fn unwritable_target_is_an_output_error() {
    let base = common::tmp_dir("report_blocked");
    // a plain file where the directory should be
    let blocker = base.join("result");
    fs::write(&blocker, "not a dir").unwrap();

    let err = write_failures(&blocker.join("x.csv"), &[], ",").await.unwrap_err();
    assert!(matches!(err, CheckError::Output { .. }));
}
