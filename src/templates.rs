// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! Page templates.
//!
//! Compile-time askama templates, each taking the shared [`Profile`] as
//! context. The contact page additionally carries the echoed form, the
//! error set, and the success flag so it can redisplay after a failed
//! submission. The same structs drive the live server and the offline
//! static build.

use crate::profile::Profile;
use crate::validator::{ErrorSet, SubmissionForm};
use askama::Template;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage<'a> {
    pub profile: &'a Profile,
}

#[derive(Template)]
#[template(path = "experience.html")]
pub struct ExperiencePage<'a> {
    pub profile: &'a Profile,
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsPage<'a> {
    pub profile: &'a Profile,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage<'a> {
    pub profile: &'a Profile,
    pub form: &'a SubmissionForm,
    pub errors: &'a ErrorSet,
    pub success: bool,
}

impl<'a> ContactPage<'a> {
    /// The empty contact page shown on GET and by the static build.
    pub fn blank(profile: &'a Profile, form: &'a SubmissionForm, errors: &'a ErrorSet) -> Self {
        Self {
            profile,
            form,
            errors,
            success: false,
        }
    }
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundPage<'a> {
    pub profile: &'a Profile,
}
