// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! The contact submission pipeline.
//!
//! One submission moves `Received → RateChecked → Validated → Sent`, with
//! early exits at the rate gate and at validation. Every path ends in a
//! [`SubmissionOutcome`] the handler maps onto a response; a submission is
//! never handed to the mailer unless its error set is empty.

use crate::limiter::{RateLimitResult, RateLimiter};
use crate::mailer::Mailer;
use crate::validator::{self, ErrorSet, SubmissionForm, MSG_DELIVERY_FAILED};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Swappable validation hook, for observing the stage in tests.
pub type ValidateFn = Arc<dyn Fn(&SubmissionForm) -> ErrorSet + Send + Sync>;

/// Terminal state of one submission.
#[derive(Debug, Clone)]
pub enum SubmissionOutcome {
    /// Notification delivered; the form should be cleared.
    Accepted,
    /// Validation failed; redisplay the form pre-filled with `form`.
    Invalid { form: SubmissionForm, errors: ErrorSet },
    /// Validation passed but delivery failed; a single general error.
    DeliveryFailed { form: SubmissionForm, errors: ErrorSet },
    /// Rejected at the rate gate before validation ran.
    Throttled { retry_after: Duration },
}

/// Composes the rate gate, the validator, and the notification sender.
pub struct ContactPipeline {
    limiter: RateLimiter,
    mailer: Arc<dyn Mailer>,
    validate: ValidateFn,
}

impl ContactPipeline {
    pub fn new(limiter: RateLimiter, mailer: Arc<dyn Mailer>) -> Self {
        Self::with_validator(limiter, mailer, Arc::new(validator::validate))
    }

    /// Construct with a custom validation hook.
    pub fn with_validator(
        limiter: RateLimiter,
        mailer: Arc<dyn Mailer>,
        validate: ValidateFn,
    ) -> Self {
        Self {
            limiter,
            mailer,
            validate,
        }
    }

    /// Access to the rate limiter, for the periodic cleanup task.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Run one submission from `ip` through to its outcome.
    pub async fn submit(&self, ip: IpAddr, form: SubmissionForm) -> SubmissionOutcome {
        if let RateLimitResult::Limited { retry_after } = self.limiter.check(ip).await {
            info!(%ip, retry_after_secs = retry_after.as_secs(), "Submission throttled");
            return SubmissionOutcome::Throttled { retry_after };
        }

        let errors = (self.validate)(&form);
        if !errors.is_empty() {
            info!(%ip, ?errors, "Submission failed validation");
            return SubmissionOutcome::Invalid { form, errors };
        }

        match self.mailer.send(&form).await {
            Ok(()) => {
                info!(%ip, submitter = %form.name, "Contact notification sent");
                SubmissionOutcome::Accepted
            }
            Err(err) => {
                error!(%ip, error = %err, "Contact notification delivery failed");
                SubmissionOutcome::DeliveryFailed {
                    form,
                    errors: ErrorSet::general(MSG_DELIVERY_FAILED),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateLimitConfig;
    use crate::mailer::DeliveryError;
    use async_trait::async_trait;
    use std::net::Ipv4Addr;
    use std::sync::atomic::{AtomicU64, Ordering};

    struct FakeMailer {
        sent: AtomicU64,
        fail: bool,
    }

    impl FakeMailer {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                sent: AtomicU64::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl Mailer for FakeMailer {
        async fn send(&self, _form: &SubmissionForm) -> Result<(), DeliveryError> {
            if self.fail {
                return Err(DeliveryError::Timeout(Duration::from_secs(30)));
            }
            self.sent.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    fn pipeline(mailer: Arc<FakeMailer>) -> ContactPipeline {
        ContactPipeline::new(
            RateLimiter::new(RateLimitConfig::default()),
            mailer,
        )
    }

    fn client() -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(192, 0, 2, 7))
    }

    fn valid_form() -> SubmissionForm {
        SubmissionForm {
            name: "Jane".to_string(),
            mobile: "123".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_submission_is_sent() {
        let mailer = FakeMailer::new(false);
        let pipeline = pipeline(mailer.clone());

        let outcome = pipeline.submit(client(), valid_form()).await;
        assert!(matches!(outcome, SubmissionOutcome::Accepted));
        assert_eq!(mailer.sent.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_invalid_submission_never_reaches_mailer() {
        let mailer = FakeMailer::new(false);
        let pipeline = pipeline(mailer.clone());

        let form = SubmissionForm {
            name: String::new(),
            ..valid_form()
        };
        let outcome = pipeline.submit(client(), form.clone()).await;

        match outcome {
            SubmissionOutcome::Invalid { form: echoed, errors } => {
                assert_eq!(errors.name.as_deref(), Some("Name is required"));
                assert_eq!(echoed, form);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert_eq!(mailer.sent.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_delivery_failure_yields_general_error() {
        let pipeline = pipeline(FakeMailer::new(true));

        let outcome = pipeline.submit(client(), valid_form()).await;
        match outcome {
            SubmissionOutcome::DeliveryFailed { form, errors } => {
                assert_eq!(errors.general.as_deref(), Some(MSG_DELIVERY_FAILED));
                assert_eq!(form.email, "jane@x.com");
            }
            other => panic!("expected DeliveryFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_throttled_submission_skips_validator() {
        let calls = Arc::new(AtomicU64::new(0));
        let counted = calls.clone();
        let pipeline = ContactPipeline::with_validator(
            RateLimiter::new(RateLimitConfig {
                window_secs: 900,
                max_attempts: 5,
            }),
            FakeMailer::new(false),
            Arc::new(move |form: &SubmissionForm| {
                counted.fetch_add(1, Ordering::Relaxed);
                validator::validate(form)
            }),
        );

        for _ in 0..5 {
            let outcome = pipeline.submit(client(), valid_form()).await;
            assert!(matches!(outcome, SubmissionOutcome::Accepted));
        }
        assert_eq!(calls.load(Ordering::Relaxed), 5);

        let outcome = pipeline.submit(client(), valid_form()).await;
        assert!(matches!(outcome, SubmissionOutcome::Throttled { .. }));
        assert_eq!(calls.load(Ordering::Relaxed), 5);
    }
}
