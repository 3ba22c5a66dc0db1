// tests/common/mod.rs
//
// Shared helpers: temp dirs and an in-memory navigator.
//
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use mint_check::browser::Navigator;
use mint_check::error::CheckError;

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("mint_check_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Base dir with `csv/<file>` already written.
pub fn base_with_input(name: &str, file: &str, contents: &str) -> PathBuf {
    let base = tmp_dir(name);
    fs::create_dir_all(base.join("csv")).unwrap();
    fs::write(base.join("csv").join(file), contents).unwrap();
    base
}

/// Serves titles from a map; unknown URLs fail like a dead link.
pub struct FakeNav {
    titles: HashMap<String, String>,
    pub visited: Vec<String>,
    closed: Arc<AtomicBool>,
}

impl FakeNav {
    pub fn new(pairs: &[(&str, &str)]) -> (Self, Arc<AtomicBool>) {
        let closed = Arc::new(AtomicBool::new(false));
        let nav = Self {
            titles: pairs.iter().map(|(u, t)| (u.to_string(), t.to_string())).collect(),
            visited: Vec::new(),
            closed: Arc::clone(&closed),
        };
        (nav, closed)
    }
}

impl Navigator for FakeNav {
    async fn fetch_title(&mut self, url: &str) -> Result<String, CheckError> {
        self.visited.push(url.to_string());
        self.titles
            .get(url)
            .cloned()
            .ok_or_else(|| CheckError::navigation(url, "net::ERR_NAME_NOT_RESOLVED"))
    }

    async fn close(self) -> Result<(), CheckError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

pub fn was_closed(flag: &Arc<AtomicBool>) -> bool {
    flag.load(Ordering::SeqCst)
}
