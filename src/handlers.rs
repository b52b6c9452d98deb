// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! HTTP handlers for the portfolio server.
//!
//! Every failure path re-renders a page rather than dumping an error:
//! validation failures come back as the contact page with field messages
//! and the entered values, delivery failures as the same page with one
//! general message. Only the rate-limit rejection is plain text, with a
//! `Retry-After` header.

use crate::config::Config;
use crate::pipeline::{ContactPipeline, SubmissionOutcome};
use crate::profile::Profile;
use crate::templates::{ContactPage, ExperiencePage, HomePage, NotFoundPage, ProjectsPage};
use crate::validator::{ErrorSet, SubmissionForm};
use crate::vcard;
use askama::Template;
use axum::{
    extract::{ConnectInfo, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, warn};

use crate::limiter::RATE_LIMIT_MESSAGE;

/// Shared application state.
pub struct AppState {
    pub profile: Profile,
    pub pipeline: ContactPipeline,
    pub config: Config,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "portfolio-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    page(StatusCode::OK, &HomePage { profile: &state.profile })
}

pub async fn experience(State(state): State<Arc<AppState>>) -> Response {
    page(StatusCode::OK, &ExperiencePage { profile: &state.profile })
}

pub async fn projects(State(state): State<Arc<AppState>>) -> Response {
    page(StatusCode::OK, &ProjectsPage { profile: &state.profile })
}

/// The empty contact form.
pub async fn contact_page(State(state): State<Arc<AppState>>) -> Response {
    let form = SubmissionForm::default();
    let errors = ErrorSet::default();
    page(
        StatusCode::OK,
        &ContactPage::blank(&state.profile, &form, &errors),
    )
}

/// Contact form submission.
pub async fn contact_submit(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Form(form): Form<SubmissionForm>,
) -> Response {
    match state.pipeline.submit(addr.ip(), form).await {
        SubmissionOutcome::Accepted => {
            let form = SubmissionForm::default();
            let errors = ErrorSet::default();
            page(
                StatusCode::OK,
                &ContactPage {
                    profile: &state.profile,
                    form: &form,
                    errors: &errors,
                    success: true,
                },
            )
        }
        SubmissionOutcome::Invalid { form, errors } => page(
            StatusCode::BAD_REQUEST,
            &ContactPage::blank(&state.profile, &form, &errors),
        ),
        SubmissionOutcome::DeliveryFailed { form, errors } => page(
            StatusCode::OK,
            &ContactPage::blank(&state.profile, &form, &errors),
        ),
        SubmissionOutcome::Throttled { retry_after } => (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, retry_after.as_secs().to_string())],
            RATE_LIMIT_MESSAGE,
        )
            .into_response(),
    }
}

/// Resume download, served as an attachment.
pub async fn resume(State(state): State<Arc<AppState>>) -> Response {
    let path = format!("{}/resume.pdf", state.config.public_dir);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!(
                        "attachment; filename=\"{}_Resume.pdf\"",
                        state.profile.file_stem()
                    ),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err) => {
            warn!(path = %path, error = %err, "Resume file unavailable");
            page(
                StatusCode::NOT_FOUND,
                &NotFoundPage { profile: &state.profile },
            )
        }
    }
}

/// vCard download built from the profile.
pub async fn vcard_download(State(state): State<Arc<AppState>>) -> Response {
    (
        [
            (header::CONTENT_TYPE, vcard::CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", vcard::file_name(&state.profile)),
            ),
        ],
        vcard::render(&state.profile),
    )
        .into_response()
}

/// Fallback for unmatched routes.
pub async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    page(
        StatusCode::NOT_FOUND,
        &NotFoundPage { profile: &state.profile },
    )
}

/// Render a template into a response, logging render trouble instead of
/// leaking it to the visitor.
fn page<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!(error = %err, "Template rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong rendering this page.",
            )
                .into_response()
        }
    }
}
