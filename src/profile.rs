// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! The site owner's profile record.
//!
//! Loaded once at startup from `profile.json` and shared read-only with
//! every renderer; it is never mutated afterwards.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use url::Url;

/// Static identity and contact data for the portfolio owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Role or organization line, used on pages and in the vCard ORG field
    pub org: String,
    /// Free-form line for the vCard NOTE field
    pub note: String,
    /// Platform name to profile URL, e.g. "github", "linkedin"
    #[serde(default)]
    pub links: BTreeMap<String, Url>,
}

impl Profile {
    /// Load the profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading profile data from {}", path.display()))?;
        let profile: Profile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing profile data in {}", path.display()))?;
        Ok(profile)
    }

    /// Look up a social link by platform name.
    pub fn link(&self, platform: &str) -> Option<&Url> {
        self.links.get(platform)
    }

    /// The owner's name with spaces replaced, for download filenames.
    pub fn file_stem(&self) -> String {
        self.name.replace(' ', "_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        serde_json::from_str(
            r#"{
                "name": "Noah Petersen",
                "email": "noah@petersen.dev",
                "phone": "+45 31 12 88 40",
                "location": "Copenhagen, Denmark",
                "org": "Backend Engineer",
                "note": "Backend engineer focused on Rust services",
                "links": {
                    "github": "https://github.com/npetersen",
                    "linkedin": "https://www.linkedin.com/in/noah-petersen"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_profile() {
        let profile = sample();
        assert_eq!(profile.name, "Noah Petersen");
        assert_eq!(
            profile.link("github").unwrap().as_str(),
            "https://github.com/npetersen"
        );
        assert!(profile.link("mastodon").is_none());
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(sample().file_stem(), "Noah_Petersen");
    }

    #[test]
    fn test_links_optional() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "name": "A",
                "email": "a@b.c",
                "phone": "1",
                "location": "X",
                "org": "Y",
                "note": "Z"
            }"#,
        )
        .unwrap();
        assert!(profile.links.is_empty());
    }
}
