// SPDX-License-Identifier: MPL-2.0
//! Contact-form field record and validation.
//!
//! Validation is a pure function from the field record to a record of
//! per-field results, so it can be exercised without any UI. Error values
//! are translation keys; rendering them is the caller's concern.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1000;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

/// The closed set of project categories a prospect can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Fintech,
    Commercial,
    Social,
    Ecological,
    Other,
}

impl ProjectType {
    pub const ALL: &'static [ProjectType] = &[
        ProjectType::Fintech,
        ProjectType::Commercial,
        ProjectType::Social,
        ProjectType::Ecological,
        ProjectType::Other,
    ];

    /// Stable identifier, also the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Fintech => "fintech",
            ProjectType::Commercial => "commercial",
            ProjectType::Social => "social",
            ProjectType::Ecological => "ecological",
            ProjectType::Other => "other",
        }
    }

    /// Translation key for the display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ProjectType::Fintech => "contact-project-fintech",
            ProjectType::Commercial => "contact-project-commercial",
            ProjectType::Social => "contact-project-social",
            ProjectType::Ecological => "contact-project-ecological",
            ProjectType::Other => "contact-project-other",
        }
    }
}

/// Error for a string outside the enumerated project-type set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProjectType(pub String);

impl fmt::Display for UnknownProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown project type: {}", self.0)
    }
}

impl std::error::Error for UnknownProjectType {}

impl FromStr for ProjectType {
    type Err = UnknownProjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .iter()
            .find(|candidate| candidate.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownProjectType(s.to_string()))
    }
}

/// Current values of the four form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project_type: Option<ProjectType>,
    pub message: String,
}

/// Per-field validation results. `None` means the field is acceptable;
/// `Some(key)` carries the translation key of the human-readable message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub project_type: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ValidationErrors {
    /// Returns true if any field failed validation.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.project_type.is_some()
            || self.message.is_some()
    }
}

/// Validates all four fields independently.
#[must_use]
pub fn validate(form: &ContactForm) -> ValidationErrors {
    ValidationErrors {
        name: validate_name(&form.name),
        email: validate_email(&form.email),
        project_type: validate_project_type(form.project_type),
        message: validate_message(&form.message),
    }
}

pub fn validate_name(value: &str) -> Option<&'static str> {
    let len = value.trim().chars().count();
    if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        None
    } else {
        Some("contact-error-name")
    }
}

pub fn validate_email(value: &str) -> Option<&'static str> {
    if EMAIL_RE.is_match(value.trim()) {
        None
    } else {
        Some("contact-error-email")
    }
}

pub fn validate_project_type(value: Option<ProjectType>) -> Option<&'static str> {
    if value.is_some() {
        None
    } else {
        Some("contact-error-project")
    }
}

pub fn validate_message(value: &str) -> Option<&'static str> {
    let len = value.trim().chars().count();
    if (MESSAGE_MIN_CHARS..=MESSAGE_MAX_CHARS).contains(&len) {
        None
    } else {
        Some("contact-error-message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            project_type: Some(ProjectType::Fintech),
            message: "Interested in your services".to_string(),
        }
    }

    #[test]
    fn valid_form_passes_every_check() {
        let errors = validate(&valid_form());
        assert!(!errors.has_errors());
    }

    #[test]
    fn name_boundaries() {
        assert!(validate_name("J").is_some());
        assert!(validate_name("Jo").is_none());
        assert!(validate_name(&"a".repeat(100)).is_none());
        assert!(validate_name(&"a".repeat(101)).is_some());
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        assert!(validate_name("   ").is_some());
    }

    #[test]
    fn email_requires_standard_grammar() {
        assert!(validate_email("jo.example.com").is_some());
        assert!(validate_email("jo@").is_some());
        assert!(validate_email("@example.com").is_some());
        assert!(validate_email("jo@example").is_some());
        assert!(validate_email("jo@example.com").is_none());
        assert!(validate_email("jo+tag@mail.example.co").is_none());
    }

    #[test]
    fn message_boundaries() {
        assert!(validate_message(&"m".repeat(9)).is_some());
        assert!(validate_message(&"m".repeat(10)).is_none());
        assert!(validate_message(&"m".repeat(1000)).is_none());
        assert!(validate_message(&"m".repeat(1001)).is_some());
    }

    #[test]
    fn missing_project_type_is_rejected() {
        assert_eq!(
            validate_project_type(None),
            Some("contact-error-project")
        );
        assert!(validate_project_type(Some(ProjectType::Other)).is_none());
    }

    #[test]
    fn project_type_parses_only_the_enumerated_set() {
        for pt in ProjectType::ALL {
            assert_eq!(pt.as_str().parse::<ProjectType>().unwrap(), *pt);
        }
        let err = "blockchain".parse::<ProjectType>().unwrap_err();
        assert_eq!(err, UnknownProjectType("blockchain".to_string()));
    }

    #[test]
    fn every_field_is_checked_independently() {
        let form = ContactForm {
            name: "J".to_string(),
            email: "broken".to_string(),
            project_type: None,
            message: "too short".to_string(),
        };
        let errors = validate(&form);
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.project_type.is_some());
        assert!(errors.message.is_some());
    }
}
