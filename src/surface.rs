//! Filtered views over the navigation table.
//!
//! The table is read through two independent surfaces: the primary nav
//! (header menu with dropdowns) and the footer (link sections). Each view is
//! a pure filter over the table slice, preserving declared order, so callers
//! can re-derive it at any time with identical results.
//!
//! Visibility is per-item and per-surface: a child's flags are its own, never
//! inherited from the parent, and nav visibility never implies footer
//! visibility or vice versa.

use crate::types::{NavChildItem, NavItem};

/// A footer section: one footer-visible top-level item plus its
/// footer-visible children.
///
/// `children` may be empty; a heading with no links is a valid section, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterSection<'a> {
    pub item: &'a NavItem,
    pub children: Vec<&'a NavChildItem>,
}

/// Top-level items flagged for the primary nav, in declared order.
///
/// No sorting is applied; returns an empty vec when nothing is flagged.
pub fn top_level_nav_items(table: &[NavItem]) -> Vec<&NavItem> {
    table.iter().filter(|item| item.in_nav()).collect()
}

/// An item's children flagged for the primary nav (dropdown contents), in
/// declared order. Empty when the item has no children or none qualify.
pub fn nav_children(item: &NavItem) -> Vec<&NavChildItem> {
    item.children.iter().filter(|child| child.in_nav()).collect()
}

/// Footer sections in declared order: footer-visible items, each with its
/// footer-visible children.
pub fn footer_sections(table: &[NavItem]) -> Vec<FooterSection<'_>> {
    table
        .iter()
        .filter(|item| item.in_footer())
        .map(|item| FooterSection {
            item,
            children: item.children.iter().filter(|c| c.in_footer()).collect(),
        })
        .collect()
}
