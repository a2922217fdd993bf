//! The navigation data model.
//!
//! Two distinct record types enforce the two-level menu structure: a
//! [`NavItem`] may carry children, a [`NavChildItem`] cannot — it has no
//! `children` field at all, so deeper nesting is unrepresentable rather than
//! merely rejected at runtime.
//!
//! Serialization preserves the consumer-facing field names exactly: the
//! visibility flags serialize as `showInNav`/`showInFooter`, and absent
//! optional fields are omitted from the output rather than emitted as null.

use serde::{Deserialize, Serialize};

/// A top-level entry in the navigation table.
///
/// `href` may be absent only when the item exists to group `children`; such
/// an item renders as a non-clickable dropdown trigger. `image` decorates the
/// item itself and is independent of any child's image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Include in the primary nav surface. Absent counts as excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_nav: Option<bool>,
    /// Include in the footer surface. Absent counts as excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_footer: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavChildItem>,
}

/// A second-tier entry nested under a [`NavItem`].
///
/// Same base fields as its parent minus `children`, plus an optional
/// `description` for richer sub-menu rendering (use-case cards).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavChildItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_nav: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_footer: Option<bool>,
}

/// The single persistent call-to-action, independent of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub href: String,
}

impl NavItem {
    /// True only for an explicit `showInNav: true`; absent flags exclude.
    pub fn in_nav(&self) -> bool {
        self.show_in_nav == Some(true)
    }

    /// True only for an explicit `showInFooter: true`; absent flags exclude.
    pub fn in_footer(&self) -> bool {
        self.show_in_footer == Some(true)
    }
}

impl NavChildItem {
    /// True only for an explicit `showInNav: true`; not inherited from parent.
    pub fn in_nav(&self) -> bool {
        self.show_in_nav == Some(true)
    }

    /// True only for an explicit `showInFooter: true`; not inherited from parent.
    pub fn in_footer(&self) -> bool {
        self.show_in_footer == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flags_are_not_truthy() {
        let item = NavItem {
            label: "Blog".to_string(),
            href: Some("/blog".to_string()),
            ..Default::default()
        };
        assert!(!item.in_nav());
        assert!(!item.in_footer());
    }

    #[test]
    fn explicit_false_is_not_truthy() {
        let item = NavItem {
            label: "Pricing".to_string(),
            show_in_nav: Some(true),
            show_in_footer: Some(false),
            ..Default::default()
        };
        assert!(item.in_nav());
        assert!(!item.in_footer());
    }

    #[test]
    fn flags_serialize_camel_case() {
        let item = NavItem {
            label: "Pricing".to_string(),
            href: Some("/pricing".to_string()),
            show_in_nav: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""showInNav":true"#));
        assert!(!json.contains("show_in_nav"));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let item = NavItem {
            label: "Pricing".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"label":"Pricing"}"#);
    }

    #[test]
    fn child_description_round_trips() {
        let child = NavChildItem {
            label: "Smart matching".to_string(),
            href: Some("/use-cases/smart-matching".to_string()),
            description: Some("Better matches, faster.".to_string()),
            show_in_nav: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_string(&child).unwrap();
        let back: NavChildItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, child);
    }

    #[test]
    fn missing_flags_deserialize_to_none() {
        let item: NavItem = serde_json::from_str(r#"{"label":"More"}"#).unwrap();
        assert_eq!(item.show_in_nav, None);
        assert_eq!(item.show_in_footer, None);
        assert!(item.children.is_empty());
    }
}
