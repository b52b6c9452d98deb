// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! Portfolio site server.
//!
//! This crate serves a small personal portfolio and handles its contact
//! form end to end:
//!
//! - Fixed-window per-IP rate limiting on submissions (5 per 15 minutes)
//! - Field validation with per-field error messages and input echo
//! - Email notification delivery over SMTP
//! - Page rendering from compile-time templates with a shared [`Profile`]
//! - vCard 3.0 export of the owner's contact details
//!
//! The same templates drive an offline static-site build (`portfolio-build`),
//! which renders every page into `dist/` and copies the `public/` assets.

pub mod config;
pub mod handlers;
pub mod limiter;
pub mod mailer;
pub mod pipeline;
pub mod profile;
pub mod templates;
pub mod validator;
pub mod vcard;

pub use config::Config;
pub use limiter::{RateLimitResult, RateLimiter};
pub use mailer::{DeliveryError, Mailer, SmtpMailer};
pub use pipeline::{ContactPipeline, SubmissionOutcome};
pub use profile::Profile;
pub use validator::{ErrorSet, SubmissionForm};
