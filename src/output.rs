//! CLI output formatting for the navigation inventory.
//!
//! Information-first display: each entry leads with its positional index and
//! label, with the href and surface flags as trailing context and children
//! indented one level. Used by the `check` subcommand.
//!
//! ```text
//! Navigation
//! 001 Pricing → /pricing [nav]
//! 002 Use Cases [nav, footer]
//!     001 Conversations that reveal true fit → /use-cases/conversation-matching [nav, footer]
//!     002 More than keywords: better matches, faster → /use-cases/smart-matching [nav, footer]
//!     003 Hiring decisions you can trust → /use-cases/contextual-hiring-insights [nav, footer]
//! ...
//!
//! CTA
//!     Book demo → /
//! ```

use crate::types::{Cta, NavChildItem, NavItem};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the surface tags for a flag pair: `[nav]`, `[footer]`,
/// `[nav, footer]`, or empty when the entry appears on neither surface.
fn surface_tags(in_nav: bool, in_footer: bool) -> String {
    match (in_nav, in_footer) {
        (true, true) => " [nav, footer]".to_string(),
        (true, false) => " [nav]".to_string(),
        (false, true) => " [footer]".to_string(),
        (false, false) => String::new(),
    }
}

/// Format an entry header: index, label, optional href arrow, surface tags.
fn entry_line(index: usize, label: &str, href: Option<&str>, tags: &str) -> String {
    match href {
        Some(href) => format!("{} {} → {}{}", format_index(index), label, href, tags),
        None => format!("{} {}{}", format_index(index), label, tags),
    }
}

fn item_line(index: usize, item: &NavItem) -> String {
    let tags = surface_tags(item.in_nav(), item.in_footer());
    entry_line(index, &item.label, item.href.as_deref(), &tags)
}

fn child_line(index: usize, child: &NavChildItem) -> String {
    let tags = surface_tags(child.in_nav(), child.in_footer());
    entry_line(index, &child.label, child.href.as_deref(), &tags)
}

/// Format the full inventory: every entry in declared order, regardless of
/// surface flags, so hidden entries are visible to whoever edits the table.
pub fn format_inventory(table: &[NavItem], cta: &Cta) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Navigation".to_string());
    for (i, item) in table.iter().enumerate() {
        lines.push(item_line(i + 1, item));
        for (j, child) in item.children.iter().enumerate() {
            lines.push(format!("    {}", child_line(j + 1, child)));
        }
    }

    lines.push(String::new());
    lines.push("CTA".to_string());
    lines.push(format!("    {} → {}", cta.label, cta.href));

    lines
}
