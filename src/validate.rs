// src/validate.rs
//! Title matching. Plain case-sensitive substring containment, no
//! normalization; the marketplace's title format is stable enough for that.

use crate::config::consts::{FOIL_MARKER, REASON_NOT_FOIL, REASON_NOT_PREFIX, REASON_WRONG_URL};
use crate::model::{CheckResult, Failure, ListingCheck};

/// Decide pass/fail for one fetched title.
///
/// A title without the card name means the URL points at the wrong page
/// altogether: that yields the single reason `Wrong URL` and nothing else is
/// checked. Otherwise foil, variant and extra variant are all checked and
/// every miss is reported, in that order.
pub fn validate(page_title: &str, check: &ListingCheck) -> CheckResult {
    if !page_title.contains(check.front_face_name.as_str()) {
        return fail(check, vec![s!(REASON_WRONG_URL)]);
    }

    let mut reasons = Vec::new();

    if check.is_foil && !page_title.contains(FOIL_MARKER) {
        reasons.push(s!(REASON_NOT_FOIL));
    }
    for label in [&check.variant, &check.extra_variant].into_iter().flatten() {
        if !page_title.contains(label.as_str()) {
            reasons.push(join!(REASON_NOT_PREFIX, label));
        }
    }

    if reasons.is_empty() {
        CheckResult::Success
    } else {
        fail(check, reasons)
    }
}

/// True when a failure is the name mismatch rather than an attribute mismatch.
pub fn is_wrong_url(failure: &Failure) -> bool {
    failure.reasons.len() == 1 && failure.reasons[0] == REASON_WRONG_URL
}

fn fail(check: &ListingCheck, reasons: Vec<String>) -> CheckResult {
    CheckResult::Failure(Failure { url: check.url.clone(), reasons })
}
