// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! Portfolio Server
//!
//! Serves the portfolio pages, static assets, resume and vCard downloads,
//! and the contact form pipeline (rate limit → validate → email).
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables:
//!
//! - `BIND_ADDR`: Server bind address (default: 0.0.0.0:3000)
//! - `PROFILE_PATH`: Profile data file (default: profile.json)
//! - `PUBLIC_DIR`: Static asset directory (default: public)
//! - `RATE_LIMIT_WINDOW_SECS`: Submission window length (default: 900)
//! - `RATE_LIMIT_MAX`: Max submissions per window per address (default: 5)
//! - `SMTP_HOST`: SMTP relay host (default: smtp.gmail.com)
//! - `EMAIL_USER`: Sender account identity / From address
//! - `EMAIL_PASS`: Sender account secret

use axum::{
    routing::{any, get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use portfolio_server::{
    config::{Config, MailConfig, RateLimitConfig},
    handlers::{self, AppState},
    limiter::RateLimiter,
    mailer::SmtpMailer,
    pipeline::ContactPipeline,
    profile::Profile,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Load configuration and profile
    let config = load_config();
    let profile = Profile::load(&config.profile_path)?;
    info!(
        bind_addr = %config.bind_addr,
        owner = %profile.name,
        window_secs = config.rate_limit.window_secs,
        max_attempts = config.rate_limit.max_attempts,
        "Starting portfolio server"
    );

    // Create application state
    let limiter = RateLimiter::new(config.rate_limit.clone());
    let mailer = Arc::new(SmtpMailer::new(&config.mail)?);
    let pipeline = ContactPipeline::new(limiter, mailer);

    let state = Arc::new(AppState {
        profile,
        pipeline,
        config: config.clone(),
    });

    // Spawn limiter cleanup task
    let cleanup_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            cleanup_state.pipeline.limiter().cleanup().await;
        }
    });

    // Static assets from public/, falling back to the 404 page
    let assets = ServeDir::new(&config.public_dir)
        .not_found_service(any(handlers::not_found).with_state(state.clone()));

    // Build router
    let app = Router::new()
        .route("/", get(handlers::home))
        .route("/experience", get(handlers::experience))
        .route("/projects", get(handlers::projects))
        .route("/contact", get(handlers::contact_page))
        .route("/contact", post(handlers::contact_submit))
        .route("/resume", get(handlers::resume))
        .route("/vcard", get(handlers::vcard_download))
        .route("/health", get(handlers::health))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, "Server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Load configuration from environment variables.
fn load_config() -> Config {
    Config {
        bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000"),
        profile_path: env_or("PROFILE_PATH", "profile.json"),
        public_dir: env_or("PUBLIC_DIR", "public"),
        rate_limit: RateLimitConfig {
            window_secs: env_parsed("RATE_LIMIT_WINDOW_SECS", 900),
            max_attempts: env_parsed("RATE_LIMIT_MAX", 5),
        },
        mail: MailConfig {
            smtp_host: env_or("SMTP_HOST", "smtp.gmail.com"),
            // Without credentials the server still starts; delivery then
            // fails per-submission and surfaces as the general form error.
            username: env_or("EMAIL_USER", portfolio_server::mailer::RECIPIENT),
            password: std::env::var("EMAIL_PASS").unwrap_or_default(),
            ..Default::default()
        },
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
