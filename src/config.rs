// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! Configuration for the portfolio server.
//!
//! All values have defaults so the server starts with no configuration at
//! all; the binaries override individual fields from environment variables.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the portfolio server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path to the profile data file (default: profile.json)
    #[serde(default = "default_profile_path")]
    pub profile_path: String,

    /// Directory of static assets served at the site root (default: public)
    #[serde(default = "default_public_dir")]
    pub public_dir: String,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Mail delivery configuration
    #[serde(default)]
    pub mail: MailConfig,
}

/// Contact-form rate limiting, one fixed window per client address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Window length in seconds (default: 900, i.e. 15 minutes)
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Maximum submissions per window per address (default: 5)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

/// SMTP delivery settings for contact notifications.
///
/// Credentials come from `EMAIL_USER` / `EMAIL_PASS`; the notification
/// recipient is a fixed constant, not configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// SMTP relay host (default: smtp.gmail.com)
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// Sender account identity, also used as the From address
    #[serde(default)]
    pub username: String,

    /// Sender account secret
    #[serde(default)]
    pub password: String,

    /// Bound on a single delivery attempt in seconds (default: 30)
    #[serde(default = "default_send_timeout_secs")]
    pub send_timeout_secs: u64,
}

// Default value functions
fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_profile_path() -> String {
    "profile.json".to_string()
}

fn default_public_dir() -> String {
    "public".to_string()
}

fn default_window_secs() -> u64 {
    900
}

fn default_max_attempts() -> u32 {
    5
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_send_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            profile_path: default_profile_path(),
            public_dir: default_public_dir(),
            rate_limit: RateLimitConfig::default(),
            mail: MailConfig::default(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            username: String::new(),
            password: String::new(),
            send_timeout_secs: default_send_timeout_secs(),
        }
    }
}

impl RateLimitConfig {
    /// Get the window duration
    pub fn window_duration(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

impl MailConfig {
    /// Get the per-attempt delivery bound
    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }
}
