// SPDX-FileCopyrightText: 2026 Noah Petersen
// SPDX-License-Identifier: MIT

//! vCard 3.0 export of the profile.

use crate::profile::Profile;

/// Content type for the download response.
pub const CONTENT_TYPE: &str = "text/vcard";

/// Render the profile as a vCard 3.0 document.
///
/// Lines are CRLF-terminated per RFC 2426. The two URL lines carry the
/// github and linkedin links when the profile has them.
pub fn render(profile: &Profile) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", profile.name),
        format!("ORG:{}", profile.org),
        format!("TEL:{}", profile.phone),
        format!("EMAIL:{}", profile.email),
    ];

    for platform in ["github", "linkedin"] {
        if let Some(link) = profile.link(platform) {
            lines.push(format!("URL:{link}"));
        }
    }

    lines.push(format!("ADR:;;{};;;", profile.location));
    lines.push(format!("NOTE:{}", profile.note));
    lines.push("END:VCARD".to_string());

    let mut card = lines.join("\r\n");
    card.push_str("\r\n");
    card
}

/// Download filename, e.g. `Noah_Petersen.vcf`.
pub fn file_name(profile: &Profile) -> String {
    format!("{}.vcf", profile.file_stem())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn profile() -> Profile {
        let mut links = BTreeMap::new();
        links.insert(
            "github".to_string(),
            "https://github.com/npetersen".parse().unwrap(),
        );
        links.insert(
            "linkedin".to_string(),
            "https://www.linkedin.com/in/noah-petersen".parse().unwrap(),
        );
        Profile {
            name: "Noah Petersen".to_string(),
            email: "noah@petersen.dev".to_string(),
            phone: "+45 31 12 88 40".to_string(),
            location: "Copenhagen, Denmark".to_string(),
            org: "Backend Engineer".to_string(),
            note: "Rust services and tooling".to_string(),
            links,
        }
    }

    /// Minimal property parser: `KEY:value` per line, first value wins.
    fn parse(card: &str) -> std::collections::HashMap<String, Vec<String>> {
        let mut props: std::collections::HashMap<String, Vec<String>> = Default::default();
        for line in card.lines() {
            if let Some((key, value)) = line.split_once(':') {
                props.entry(key.to_string()).or_default().push(value.to_string());
            }
        }
        props
    }

    #[test]
    fn test_round_trips_profile_fields() {
        let profile = profile();
        let card = render(&profile);
        let props = parse(&card);

        assert_eq!(props["FN"], vec![profile.name.clone()]);
        assert_eq!(props["TEL"], vec![profile.phone.clone()]);
        assert_eq!(props["EMAIL"], vec![profile.email.clone()]);
        assert_eq!(
            props["URL"],
            vec![
                "https://github.com/npetersen".to_string(),
                "https://www.linkedin.com/in/noah-petersen".to_string(),
            ]
        );
        assert_eq!(props["ADR"], vec![";;Copenhagen, Denmark;;;".to_string()]);
    }

    #[test]
    fn test_card_is_well_formed() {
        let card = render(&profile());
        assert!(card.starts_with("BEGIN:VCARD\r\n"));
        assert!(card.ends_with("END:VCARD\r\n"));
        assert!(card.contains("VERSION:3.0\r\n"));
    }

    #[test]
    fn test_missing_links_are_skipped() {
        let mut profile = profile();
        profile.links.clear();
        let card = render(&profile);
        assert!(!card.contains("URL:"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(&profile()), "Noah_Petersen.vcf");
    }
}
