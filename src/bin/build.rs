// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! Offline static-site build.
//!
//! Renders every page with empty form defaults into `dist/` (the home page
//! as `index.html`) and copies the `public/` assets alongside them, so the
//! site can be hosted statically with the contact form pointed at a hosted
//! function.
//!
//! Environment:
//!
//! - `PROFILE_PATH`: Profile data file (default: profile.json)
//! - `PUBLIC_DIR`: Static asset directory (default: public)
//! - `DIST_DIR`: Output directory (default: dist)

use anyhow::{Context, Result};
use askama::Template;
use std::fs;
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use portfolio_server::{
    profile::Profile,
    templates::{ContactPage, ExperiencePage, HomePage, NotFoundPage, ProjectsPage},
    validator::{ErrorSet, SubmissionForm},
};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let profile_path = env_or("PROFILE_PATH", "profile.json");
    let public_dir = env_or("PUBLIC_DIR", "public");
    let dist_dir = env_or("DIST_DIR", "dist");

    let profile = Profile::load(&profile_path)?;
    let dist = Path::new(&dist_dir);
    fs::create_dir_all(dist).with_context(|| format!("creating {}", dist.display()))?;

    // Assets land at the site root, not in a subfolder
    let public = Path::new(&public_dir);
    if public.is_dir() {
        copy_recursive(public, dist)?;
        info!(from = %public.display(), to = %dist.display(), "Copied static assets");
    }

    let form = SubmissionForm::default();
    let errors = ErrorSet::default();
    let pages: [(&str, String); 5] = [
        ("index.html", HomePage { profile: &profile }.render()?),
        (
            "experience.html",
            ExperiencePage { profile: &profile }.render()?,
        ),
        (
            "projects.html",
            ProjectsPage { profile: &profile }.render()?,
        ),
        (
            "contact.html",
            ContactPage::blank(&profile, &form, &errors).render()?,
        ),
        ("404.html", NotFoundPage { profile: &profile }.render()?),
    ];

    for (file, html) in pages {
        let out = dist.join(file);
        fs::write(&out, html).with_context(|| format!("writing {}", out.display()))?;
        info!(page = %out.display(), "Built");
    }

    info!("Build completed successfully");
    Ok(())
}

fn copy_recursive(src: &Path, dest: &Path) -> Result<()> {
    for entry in fs::read_dir(src).with_context(|| format!("reading {}", src.display()))? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&dest_path)
                .with_context(|| format!("creating {}", dest_path.display()))?;
            copy_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).with_context(|| {
                format!("copying {} to {}", src_path.display(), dest_path.display())
            })?;
        }
    }
    Ok(())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
