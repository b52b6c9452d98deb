// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! Contact notification delivery.
//!
//! A validated submission becomes one email to the fixed [`RECIPIENT`].
//! The SMTP transport sits behind the [`Mailer`] trait so the pipeline can
//! be tested with a fake. Delivery is attempted once per submission; any
//! failure, including the configured timeout, surfaces as [`DeliveryError`].

use crate::config::MailConfig;
use crate::validator::SubmissionForm;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Fixed destination for contact notifications.
pub const RECIPIENT: &str = "noah@petersen.dev";

/// A failed delivery attempt. Never retried automatically.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to assemble notification: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("mail transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("delivery timed out after {0:?}")]
    Timeout(Duration),
}

/// Delivery of a contact notification for one validated submission.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, form: &SubmissionForm) -> Result<(), DeliveryError>;
}

/// [`Mailer`] backed by an SMTP relay (STARTTLS).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
    timeout: Duration,
}

impl SmtpMailer {
    /// Build the transport from mail configuration.
    pub fn new(config: &MailConfig) -> Result<Self, DeliveryError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.username.parse()?,
            to: RECIPIENT.parse()?,
            timeout: config.send_timeout(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, form: &SubmissionForm) -> Result<(), DeliveryError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject(form))
            .multipart(MultiPart::alternative_plain_html(
                notification_text(form),
                notification_html(form),
            ))?;

        debug!(submitter = %form.name, "Sending contact notification");
        match tokio::time::timeout(self.timeout, self.transport.send(message)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(err)) => Err(DeliveryError::Transport(err)),
            Err(_) => Err(DeliveryError::Timeout(self.timeout)),
        }
    }
}

/// Subject line interpolating the submitter's name.
pub fn subject(form: &SubmissionForm) -> String {
    format!("New Contact Form Submission from {}", form.name)
}

/// HTML notification body with the message's newlines as line breaks.
pub fn notification_html(form: &SubmissionForm) -> String {
    format!(
        "<h2>New Contact Form Submission</h2>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Mobile:</strong> {mobile}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{message}</p>\n\
         <hr>\n\
         <p><em>Sent from your portfolio contact form</em></p>",
        name = escape_html(&form.name),
        email = escape_html(&form.email),
        mobile = escape_html(&form.mobile),
        message = escape_html(&form.message).replace('\n', "<br>"),
    )
}

/// Plain-text alternative part.
pub fn notification_text(form: &SubmissionForm) -> String {
    format!(
        "New Contact Form Submission\n\n\
         Name: {}\nEmail: {}\nMobile: {}\n\nMessage:\n{}\n\n\
         Sent from your portfolio contact form",
        form.name, form.email, form.mobile, form.message,
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SubmissionForm {
        SubmissionForm {
            name: "Jane".to_string(),
            mobile: "123".to_string(),
            email: "jane@x.com".to_string(),
            message: "line one\nline two".to_string(),
        }
    }

    #[test]
    fn test_subject_interpolates_name() {
        assert_eq!(subject(&form()), "New Contact Form Submission from Jane");
    }

    #[test]
    fn test_html_body_converts_newlines() {
        let html = notification_html(&form());
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("<strong>Mobile:</strong> 123"));
    }

    #[test]
    fn test_html_body_escapes_markup() {
        let html = notification_html(&SubmissionForm {
            message: "<script>alert(1)</script>".to_string(),
            ..form()
        });
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_text_body_keeps_all_fields() {
        let text = notification_text(&form());
        assert!(text.contains("Name: Jane"));
        assert!(text.contains("Email: jane@x.com"));
        assert!(text.contains("line one\nline two"));
    }
}
