// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! Contact-form field validation.
//!
//! Pure and deterministic: [`validate`] inspects the submitted fields and
//! returns an [`ErrorSet`]; all four fields are checked independently so the
//! form can show every problem at once.

use serde::{Deserialize, Serialize};

pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_MOBILE_REQUIRED: &str = "Mobile is required";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Email is invalid";
pub const MSG_MESSAGE_REQUIRED: &str = "Please enter a message";
pub const MSG_DELIVERY_FAILED: &str =
    "Failed to send message. Please try again or contact me directly.";

/// Raw field values of one contact-form attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Field name to human-readable message; empty means the submission is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorSet {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Non-field failure, e.g. delivery trouble after validation passed
    pub general: Option<String>,
}

impl ErrorSet {
    /// True when no field carries an error.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.mobile.is_none()
            && self.email.is_none()
            && self.message.is_none()
            && self.general.is_none()
    }

    /// An error set carrying only a `general` message.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            general: Some(message.into()),
            ..Self::default()
        }
    }
}

/// Validate a submission, returning every field error found.
pub fn validate(form: &SubmissionForm) -> ErrorSet {
    let mut errors = ErrorSet::default();

    if is_blank(&form.name) {
        errors.name = Some(MSG_NAME_REQUIRED.to_string());
    }
    if is_blank(&form.mobile) {
        errors.mobile = Some(MSG_MOBILE_REQUIRED.to_string());
    }
    if is_blank(&form.email) {
        errors.email = Some(MSG_EMAIL_REQUIRED.to_string());
    } else if !email_shape_ok(&form.email) {
        errors.email = Some(MSG_EMAIL_INVALID.to_string());
    }
    if is_blank(&form.message) {
        errors.message = Some(MSG_MESSAGE_REQUIRED.to_string());
    }

    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: a non-empty
/// local part, a single `@`, and a domain containing an interior dot,
/// with no whitespace anywhere.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
