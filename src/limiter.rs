// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! Fixed-window rate limiter for contact-form submissions.
//!
//! One window per client address: the first attempt opens a window with
//! count 1; later attempts within the window increment the count and are
//! rejected once it exceeds the configured maximum. An elapsed window is
//! replaced on the next attempt. State lives in memory only.

use crate::config::RateLimitConfig;
use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// User-facing rejection text, matching the form page's tone.
pub const RATE_LIMIT_MESSAGE: &str =
    "Too many contact form submissions, please try again later.";

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub enum RateLimitResult {
    /// Attempt is allowed
    Allowed {
        /// Remaining attempts in the current window
        remaining: u32,
        /// Time until the window resets
        reset_in: Duration,
    },
    /// Attempt is rejected
    Limited {
        /// Time until the window elapses
        retry_after: Duration,
    },
}

/// One client's window state.
#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Thread-safe per-address limiter.
///
/// The read-increment-write of a window happens under a single write lock,
/// so concurrent attempts from the same address cannot undercount.
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: RwLock<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: RwLock::new(HashMap::new()),
        }
    }

    /// Record an attempt from `ip` and decide whether it may proceed.
    pub async fn check(&self, ip: IpAddr) -> RateLimitResult {
        self.check_at(ip, Instant::now()).await
    }

    /// [`check`](Self::check) with an explicit clock, for tests.
    pub async fn check_at(&self, ip: IpAddr, now: Instant) -> RateLimitResult {
        let window_len = self.config.window_duration();

        let mut windows = self.windows.write().await;
        let window = windows.entry(ip).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(window.started) >= window_len {
            window.started = now;
            window.count = 0;
        }
        window.count += 1;

        let elapsed = now.duration_since(window.started);
        let reset_in = window_len.saturating_sub(elapsed);

        if window.count <= self.config.max_attempts {
            let remaining = self.config.max_attempts - window.count;
            debug!(%ip, count = window.count, remaining, "Submission attempt allowed");
            RateLimitResult::Allowed {
                remaining,
                reset_in,
            }
        } else {
            debug!(%ip, count = window.count, retry_after = ?reset_in, "Submission rate limit exceeded");
            RateLimitResult::Limited {
                retry_after: reset_in,
            }
        }
    }

    /// Drop windows that have elapsed (should be called periodically).
    pub async fn cleanup(&self) {
        self.cleanup_at(Instant::now()).await;
    }

    /// [`cleanup`](Self::cleanup) with an explicit clock, for tests.
    pub async fn cleanup_at(&self, now: Instant) {
        let window_len = self.config.window_duration();
        let mut windows = self.windows.write().await;
        windows.retain(|_, window| now.duration_since(window.started) < window_len);
    }

    /// Number of tracked addresses, for tests and diagnostics.
    pub async fn tracked_addresses(&self) -> usize {
        self.windows.read().await.len()
    }
}
