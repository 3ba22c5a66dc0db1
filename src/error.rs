// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can stop a run. A page whose title does not match is
/// *not* an error; that is a `CheckResult::Failure`.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Input file missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input file read but not a usable listing table.
    #[error("cannot parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("no file name given")]
    EmptyFileName,

    #[error("cannot read from stdin: {0}")]
    Prompt(#[source] io::Error),

    /// Launch or shutdown of the browser itself.
    #[error("browser: {message}")]
    Browser { message: String },

    /// Any failure loading a page or reading its title.
    #[error("navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    /// Report file could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CheckError {
    /// True for every kind the user sees as "File cannot be accessed!".
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            CheckError::Input { .. }
                | CheckError::Parse { .. }
                | CheckError::EmptyFileName
                | CheckError::Prompt(_)
        )
    }

    pub fn navigation(url: &str, message: impl ToString) -> Self {
        CheckError::Navigation { url: s!(url), message: message.to_string() }
    }

    pub fn browser(message: impl ToString) -> Self {
        CheckError::Browser { message: message.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_kinds_are_grouped() {
        let missing = CheckError::Input {
            path: PathBuf::from("csv/x.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "nope"),
        };
        assert!(missing.is_input());
        assert!(CheckError::EmptyFileName.is_input());
        assert!(!CheckError::navigation("http://x/1", "timeout").is_input());
        assert!(!CheckError::browser("no chrome").is_input());
    }

    #[test]
    fn navigation_message_names_the_url() {
        let e = CheckError::navigation("http://x/1", "net::ERR_NAME_NOT_RESOLVED");
        assert_eq!(e.to_string(), "navigation to http://x/1 failed: net::ERR_NAME_NOT_RESOLVED");
    }
}
