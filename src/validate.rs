//! Shape validation for the navigation table.
//!
//! The table performs no I/O and no computation, so the only way it can go
//! wrong is a shape violation: an empty label, a linkless leaf, a child with
//! nowhere to point. Validation rejects the whole table on the first
//! violation rather than dropping the offending entry; a silently thinner
//! menu in production is worse than a failed build.
//!
//! Content is not interpreted: labels, hrefs, images, and descriptions pass
//! through verbatim. Escaping and URL handling belong to the renderer.

use crate::types::{Cta, NavItem};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShapeError {
    #[error("top-level item {0} has an empty label")]
    EmptyLabel(usize),
    #[error("child {1} of {0:?} has an empty label")]
    EmptyChildLabel(String, usize),
    #[error("item {0:?} has no href and no children to group")]
    LinklessLeaf(String),
    #[error("item {0:?} has an empty href")]
    EmptyHref(String),
    #[error("child {1:?} of {0:?} has no href")]
    LinklessChild(String, String),
    #[error("child {1:?} of {0:?} has an empty href")]
    EmptyChildHref(String, String),
    #[error("CTA has an empty {0}")]
    EmptyCta(&'static str),
}

/// Validate the table and CTA against the two-level shape rules.
///
/// Rules:
/// - every label is non-empty, including the CTA's;
/// - a top-level item without `href` must group at least one child;
/// - every child carries an `href` (a child cannot group, so it must link);
/// - an `href`, where present, is non-empty, as is the CTA's.
///
/// Deeper nesting needs no rule here: a child has no `children` field.
pub fn validate(table: &[NavItem], cta: &Cta) -> Result<(), ShapeError> {
    for (idx, item) in table.iter().enumerate() {
        if item.label.is_empty() {
            return Err(ShapeError::EmptyLabel(idx));
        }
        match &item.href {
            Some(href) if href.is_empty() => {
                return Err(ShapeError::EmptyHref(item.label.clone()));
            }
            None if item.children.is_empty() => {
                return Err(ShapeError::LinklessLeaf(item.label.clone()));
            }
            _ => {}
        }
        for (child_idx, child) in item.children.iter().enumerate() {
            if child.label.is_empty() {
                return Err(ShapeError::EmptyChildLabel(item.label.clone(), child_idx));
            }
            match &child.href {
                None => {
                    return Err(ShapeError::LinklessChild(
                        item.label.clone(),
                        child.label.clone(),
                    ));
                }
                Some(href) if href.is_empty() => {
                    return Err(ShapeError::EmptyChildHref(
                        item.label.clone(),
                        child.label.clone(),
                    ));
                }
                _ => {}
            }
        }
    }
    if cta.label.is_empty() {
        return Err(ShapeError::EmptyCta("label"));
    }
    if cta.href.is_empty() {
        return Err(ShapeError::EmptyCta("href"));
    }
    Ok(())
}
