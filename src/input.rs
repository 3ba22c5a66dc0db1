// src/input.rs
//! Input side: the file-name prompt and the listing table reader.
//!
//! The table is a headed CSV. Columns are matched by name so order does not
//! matter and extra columns are ignored. Rows missing a card name or a URL are
//! dropped without a word; every cell is trimmed.

use std::io::{BufRead, Write};
use std::path::Path;

use serde::Deserialize;

use crate::config::consts::{COL_NAME, COL_URL, PROMPT};
use crate::error::CheckError;
use crate::model::ListingCheck;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRow {
    #[serde(rename = "frontFaceName")]
    front_face_name: String,
    #[serde(rename = "isFoil")]
    is_foil: String,
    variant: String,
    #[serde(rename = "extraVariant")]
    extra_variant: String,
    #[serde(rename = "mtgmintcardUrl")]
    url: String,
}

impl RawRow {
    fn into_check(self) -> Option<ListingCheck> {
        Some(ListingCheck {
            front_face_name: non_empty!(self.front_face_name)?,
            is_foil: parse_foil(&self.is_foil),
            variant: non_empty!(self.variant),
            extra_variant: non_empty!(self.extra_variant),
            url: non_empty!(self.url)?,
        })
    }
}

/// Ask for the input file name. Reads one line; surrounding whitespace is dropped.
pub fn prompt_file_name<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<String, CheckError> {
    write!(out, "{PROMPT}").map_err(CheckError::Prompt)?;
    out.flush().map_err(CheckError::Prompt)?;

    let mut line = s!();
    input.read_line(&mut line).map_err(CheckError::Prompt)?;

    non_empty!(line).ok_or(CheckError::EmptyFileName)
}

/// Read and parse the listing table at `path`.
pub async fn load_checks(path: &Path) -> Result<Vec<ListingCheck>, CheckError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CheckError::Input { path: path.to_path_buf(), source })?;
    let checks = parse_checks(&text, path)?;
    logf!("Loaded {} listing(s) from {}", checks.len(), path.display());
    Ok(checks)
}

/// Parse CSV text into checks, in file order. `path` is only used for error context.
pub fn parse_checks(text: &str, path: &Path) -> Result<Vec<ListingCheck>, CheckError> {
    let parse_err = |e: csv::Error| CheckError::Parse { path: path.to_path_buf(), message: e.to_string() };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.trim_start_matches('\u{feff}').as_bytes());

    let headers = rdr.headers().map_err(parse_err)?.clone();
    for required in [COL_NAME, COL_URL] {
        if !headers.iter().any(|h| h == required) {
            return Err(CheckError::Parse {
                path: path.to_path_buf(),
                message: format!("missing column `{required}`"),
            });
        }
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (i, row) in rdr.deserialize::<RawRow>().enumerate() {
        match row.map_err(parse_err)?.into_check() {
            Some(check) => out.push(check),
            None => {
                skipped += 1;
                logd!("Row {} skipped: empty name or URL", i + 2);
            }
        }
    }
    if skipped > 0 {
        logf!("{skipped} row(s) skipped for empty required fields");
    }
    Ok(out)
}

/// Foil cell -> flag. Blank and the usual negatives are false; any other
/// non-empty value marks the row as foil.
pub fn parse_foil(cell: &str) -> bool {
    !matches!(
        cell.trim().to_ascii_lowercase().as_str(),
        "" | "false" | "0" | "no" | "n"
    )
}
