// src/model.rs

/// One input row: what a listing page is expected to show in its title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingCheck {
    pub front_face_name: String,
    pub is_foil: bool,
    pub variant: Option<String>,
    pub extra_variant: Option<String>,
    pub url: String,
}

impl ListingCheck {
    pub fn new(front_face_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            front_face_name: front_face_name.into(),
            is_foil: false,
            variant: None,
            extra_variant: None,
            url: url.into(),
        }
    }

    pub fn foil(mut self) -> Self {
        self.is_foil = true;
        self
    }

    pub fn with_variant(mut self, v: impl Into<String>) -> Self {
        self.variant = Some(v.into());
        self
    }

    pub fn with_extra_variant(mut self, v: impl Into<String>) -> Self {
        self.extra_variant = Some(v.into());
        self
    }
}

/// A row that did not pass. Reasons keep the order they were checked in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub url: String,
    pub reasons: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckResult {
    Success,
    Failure(Failure),
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success)
    }

    pub fn failure(self) -> Option<Failure> {
        match self {
            CheckResult::Success => None,
            CheckResult::Failure(f) => Some(f),
        }
    }
}
