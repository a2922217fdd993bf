//! The canonical navigation table and CTA.
//!
//! This is the site's single source of truth for menus: hand-ordered, defined
//! once, and never mutated. Declared order is rendering order for every
//! surface.
//!
//! ## Intended full structure
//!
//! The long-term menu sketch, kept here so additions land in the right group:
//!
//! ```text
//! Product
//! - Overview
//! - Solutions
//! - Use Cases
//! - Pricing
//! ---
//! Resources
//! - Blog
//! - Playbooks
//! - Customer stories
//! - Webinars
//! - Darwin Academy
//! - Documentation
//! - Marketplaces
//! - Community
//! ---
//! Company
//! - Careers
//! - About us
//! - News
//! - Legal
//! - Security
//! - Events
//! - Contact
//! - Social media
//! ```

use crate::types::{Cta, NavChildItem, NavItem};
use std::sync::LazyLock;

/// The persistent call-to-action shown independent of navigation filtering.
pub fn cta() -> &'static Cta {
    static CTA: LazyLock<Cta> = LazyLock::new(|| Cta {
        label: "Book demo".to_string(),
        href: "/".to_string(),
    });
    &CTA
}

/// The ordered navigation table. Shared read-only; initialized on first use.
pub fn navigation() -> &'static [NavItem] {
    &TABLE
}

static TABLE: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
    vec![
        NavItem {
            label: "Pricing".to_string(),
            href: Some("/pricing".to_string()),
            show_in_nav: Some(true),
            show_in_footer: Some(false),
            ..Default::default()
        },
        NavItem {
            label: "Use Cases".to_string(),
            show_in_nav: Some(true),
            show_in_footer: Some(true),
            children: vec![
                NavChildItem {
                    label: "Conversations that reveal true fit".to_string(),
                    href: Some("/use-cases/conversation-matching".to_string()),
                    image: Some(
                        "/generated/image-a-professional-recruiter-having-a-conver.webp"
                            .to_string(),
                    ),
                    description: Some(
                        "Dex uses AI-powered voice and chat to get to the heart of what \
                         candidates want and what companies need — surfacing motivations, \
                         work style, and strengths that go far beyond the CV."
                            .to_string(),
                    ),
                    show_in_nav: Some(true),
                    show_in_footer: Some(true),
                },
                NavChildItem {
                    label: "More than keywords: better matches, faster".to_string(),
                    href: Some("/use-cases/smart-matching".to_string()),
                    image: Some(
                        "/generated/image-a-group-of-diverse-candidates-gathered-a.webp"
                            .to_string(),
                    ),
                    description: Some(
                        "No more endless applications or noisy job boards. Dex matches \
                         candidates to hard-to-find roles — including exclusive and \
                         unadvertised opportunities — and makes it simple for companies to \
                         hire with clarity."
                            .to_string(),
                    ),
                    show_in_nav: Some(true),
                    show_in_footer: Some(true),
                },
                NavChildItem {
                    label: "Hiring decisions you can trust".to_string(),
                    href: Some("/use-cases/contextual-hiring-insights".to_string()),
                    image: Some(
                        "/generated/image-a-business-hiring-team-in-a-meeting-room.webp"
                            .to_string(),
                    ),
                    description: Some(
                        "Dex's machine learning and large-scale data analysis uncover what \
                         drives success in every role. Hiring teams get context-rich \
                         insights that reduce churn, increase retention, and make every \
                         intro count."
                            .to_string(),
                    ),
                    show_in_nav: Some(true),
                    show_in_footer: Some(true),
                },
            ],
            ..Default::default()
        },
        NavItem {
            label: "Company".to_string(),
            show_in_nav: Some(true),
            show_in_footer: Some(true),
            children: vec![
                NavChildItem {
                    label: "About us".to_string(),
                    href: Some("/about".to_string()),
                    show_in_nav: Some(true),
                    show_in_footer: Some(true),
                    ..Default::default()
                },
                // Footer-only duplicate of the top-level Pricing entry. Distinct
                // record on purpose; surfaces never deduplicate by label.
                NavChildItem {
                    label: "Pricing".to_string(),
                    href: Some("/pricing".to_string()),
                    show_in_nav: Some(false),
                    show_in_footer: Some(true),
                    ..Default::default()
                },
                NavChildItem {
                    label: "Careers".to_string(),
                    href: Some("/careers".to_string()),
                    show_in_nav: Some(true),
                    show_in_footer: Some(true),
                    ..Default::default()
                },
            ],
            ..Default::default()
        },
        NavItem {
            label: "More".to_string(),
            show_in_nav: Some(false),
            show_in_footer: Some(true),
            children: vec![
                NavChildItem {
                    label: "Privacy".to_string(),
                    href: Some("/legal/privacy".to_string()),
                    show_in_nav: Some(false),
                    show_in_footer: Some(true),
                    ..Default::default()
                },
                NavChildItem {
                    label: "Terms".to_string(),
                    href: Some("/legal/terms".to_string()),
                    show_in_nav: Some(false),
                    show_in_footer: Some(true),
                    ..Default::default()
                },
                // Social media is handled outside the nav table.
            ],
            ..Default::default()
        },
    ]
    // An earlier revision sorted top-level entries by descending child count:
    //   .sort_by(|a, b| b.children.len().cmp(&a.children.len()))
    // Disabled: declared order is the rendering order. Kept for reference.
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_declares_four_top_level_entries_in_order() {
        let labels: Vec<&str> = navigation().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Pricing", "Use Cases", "Company", "More"]);
    }

    #[test]
    fn no_sorting_is_applied() {
        // "Use Cases" and "Company" both have three children; "Pricing" has
        // none yet leads the table. Declared order wins over child count.
        let first = &navigation()[0];
        assert_eq!(first.label, "Pricing");
        assert!(first.children.is_empty());
    }

    #[test]
    fn cta_is_book_demo() {
        assert_eq!(cta().label, "Book demo");
        assert_eq!(cta().href, "/");
    }

    #[test]
    fn grouping_items_have_no_href() {
        for item in navigation() {
            if item.href.is_none() {
                assert!(
                    !item.children.is_empty(),
                    "linkless item {:?} must group children",
                    item.label
                );
            }
        }
    }

    #[test]
    fn company_pricing_duplicate_differs_from_top_level() {
        let top = navigation().iter().find(|i| i.label == "Pricing").unwrap();
        let company = navigation().iter().find(|i| i.label == "Company").unwrap();
        let nested = company
            .children
            .iter()
            .find(|c| c.label == "Pricing")
            .unwrap();
        assert_eq!(top.show_in_nav, Some(true));
        assert_eq!(nested.show_in_nav, Some(false));
        assert_eq!(nested.href.as_deref(), top.href.as_deref());
    }

    #[test]
    fn repeated_access_is_identical() {
        assert_eq!(navigation(), navigation());
        assert_eq!(cta(), cta());
    }
}
