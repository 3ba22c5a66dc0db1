// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory holding `csv/` and `result/`.
    pub base_dir: PathBuf,
    /// File name as typed at the prompt; used for both input and report.
    pub file_name: String,
    pub browser: BrowserOptions,
    pub report: ReportOptions,
    pub on_nav_error: NavFailurePolicy,
}

impl RunOptions {
    pub fn new(base_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_name: file_name.into(),
            browser: BrowserOptions::default(),
            report: ReportOptions::default(),
            on_nav_error: NavFailurePolicy::default(),
        }
    }

    /// Build from the process environment. Base dir falls back to the
    /// executable's directory, then to the working directory.
    pub fn from_env(file_name: impl Into<String>) -> Self {
        Self::from_lookup(file_name, default_base_dir(), |k| std::env::var(k).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup<F>(file_name: impl Into<String>, fallback_base: PathBuf, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = lookup(ENV_HOME)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(fallback_base);

        let mut opts = Self::new(base_dir, file_name);

        if let Some(v) = lookup(ENV_ON_NAV_ERROR) {
            match NavFailurePolicy::parse(&v) {
                Some(p) => opts.on_nav_error = p,
                None => logw!("{ENV_ON_NAV_ERROR}={v:?} not understood; keeping {:?}", opts.on_nav_error),
            }
        }
        if let Some(v) = lookup(ENV_HEADFUL) {
            opts.browser.headless = !parse_flag(ENV_HEADFUL, &v);
        }
        if let Some(v) = lookup(ENV_NO_SANDBOX) {
            opts.browser.no_sandbox = parse_flag(ENV_NO_SANDBOX, &v);
        }
        if let Some(v) = non_empty!(lookup(ENV_CHROME).unwrap_or_default()) {
            opts.browser.executable = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup(ENV_NAV_TIMEOUT) {
            match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => opts.browser.nav_timeout = Duration::from_secs(secs),
                _ => logw!("{ENV_NAV_TIMEOUT}={v:?} not a positive number; keeping default"),
            }
        }
        opts
    }

    pub fn input_path(&self) -> PathBuf {
        self.base_dir.join(INPUT_SUBDIR).join(&self.file_name)
    }

    /// Same file name as the input, under `result/`.
    pub fn report_path(&self) -> PathBuf {
        self.base_dir.join(RESULT_SUBDIR).join(&self.file_name)
    }

    pub fn log_path(&self) -> PathBuf {
        self.base_dir.join(RESULT_SUBDIR).join(LOG_FILE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub headless: bool,
    pub no_sandbox: bool,
    pub executable: Option<PathBuf>,
    /// Upper bound on waiting for DOMContentLoaded after a navigation.
    pub nav_timeout: Duration,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            no_sandbox: false,
            executable: None,
            nav_timeout: Duration::from_secs(NAV_TIMEOUT_SECS),
        }
    }
}

/// Reason separators per output channel. The console joins with ` | `,
/// the report file with `,`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub console_sep: String,
    pub file_sep: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            console_sep: s!(CONSOLE_SEP),
            file_sep: s!(FILE_SEP),
        }
    }
}

/// What a failed page load does to the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavFailurePolicy {
    /// Stop the run; no report is written.
    #[default]
    Abort,
    /// Record the row as failed with a `Navigation failed: ...` reason and go on.
    Record,
}

impl NavFailurePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "record" | "continue" => Some(Self::Record),
            "abort" | "stop" => Some(Self::Abort),
            _ => None,
        }
    }
}

fn parse_flag(key: &str, v: &str) -> bool {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "" | "0" | "false" | "no" | "off" => false,
        other => {
            logw!("{key}={other:?} not a flag; treating as off");
            false
        }
    }
}

fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (s!(*k), s!(*v))).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn paths_share_the_file_name() {
        let opts = RunOptions::new("/opt/mint", "cards.csv");
        assert_eq!(opts.input_path(), PathBuf::from("/opt/mint/csv/cards.csv"));
        assert_eq!(opts.report_path(), PathBuf::from("/opt/mint/result/cards.csv"));
    }

    #[test]
    fn env_overrides_apply() {
        let opts = RunOptions::from_lookup(
            "a.csv",
            PathBuf::from("/fallback"),
            lookup(&[
                (ENV_HOME, "/home/mint"),
                (ENV_ON_NAV_ERROR, "Record"),
                (ENV_HEADFUL, "1"),
                (ENV_NO_SANDBOX, "true"),
                (ENV_CHROME, "/usr/bin/chromium"),
                (ENV_NAV_TIMEOUT, "5"),
            ]),
        );
        assert_eq!(opts.base_dir, PathBuf::from("/home/mint"));
        assert_eq!(opts.on_nav_error, NavFailurePolicy::Record);
        assert!(!opts.browser.headless);
        assert!(opts.browser.no_sandbox);
        assert_eq!(opts.browser.executable, Some(PathBuf::from("/usr/bin/chromium")));
        assert_eq!(opts.browser.nav_timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_env_values_keep_defaults() {
        let opts = RunOptions::from_lookup(
            "a.csv",
            PathBuf::from("/fallback"),
            lookup(&[(ENV_ON_NAV_ERROR, "explode"), (ENV_NAV_TIMEOUT, "0"), (ENV_HOME, "  ")]),
        );
        assert_eq!(opts.base_dir, PathBuf::from("/fallback"));
        assert_eq!(opts.on_nav_error, NavFailurePolicy::Abort);
        assert_eq!(opts.browser, BrowserOptions::default());
    }

    #[test]
    fn page_load_failures_abort_unless_asked_otherwise() {
        assert_eq!(NavFailurePolicy::default(), NavFailurePolicy::Abort);
        let opts = RunOptions::from_lookup("a.csv", PathBuf::from("/b"), lookup(&[]));
        assert_eq!(opts.on_nav_error, NavFailurePolicy::Abort);
        let opts = RunOptions::from_lookup("a.csv", PathBuf::from("/b"), lookup(&[(ENV_ON_NAV_ERROR, "record")]));
        assert_eq!(opts.on_nav_error, NavFailurePolicy::Record);
    }
}
