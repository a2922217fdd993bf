//! # site-nav
//!
//! The typed navigation and footer menu data for the marketing site: menu
//! labels, links, descriptive copy, and image references, plus the filtered
//! views a page renderer reads. The table is declarative configuration, not a
//! system — it is defined once, never mutated, and every operation over it is
//! a pure filter.
//!
//! # Two Surfaces, One Table
//!
//! A renderer reads the same table twice:
//!
//! ```text
//! table ──▶ surface::top_level_nav_items ──▶ header nav (+ dropdowns)
//!      └──▶ surface::footer_sections     ──▶ footer link sections
//! ```
//!
//! Each entry opts into each surface independently via `showInNav` and
//! `showInFooter`; absent flags exclude, and children never inherit a
//! parent's flags. Declared order is rendering order — no sorting, ever.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The data model: `NavItem`, `NavChildItem`, `Cta`, with the exact serde field contract |
//! | [`data`] | The canonical static table and CTA |
//! | [`surface`] | Filtered views: nav items, dropdown children, footer sections |
//! | [`validate`] | Fail-fast shape checking (empty labels, linkless leaves) |
//! | [`render`] | Maud HTML previews of both surfaces |
//! | [`output`] | CLI inventory formatting for the `check` subcommand |
//!
//! # Design Decisions
//!
//! ## Two Record Types, Not One
//!
//! Children are a distinct type ([`types::NavChildItem`]) with no `children`
//! field rather than a recursive `NavItem`. The menu is two levels deep by
//! design, and with this shape a third level is a compile error instead of a
//! runtime check.
//!
//! ## Maud Over Template Engines
//!
//! Previews are rendered with [Maud](https://maud.lambda.xyz/): compile-time
//! checked HTML, auto-escaped interpolation, and no template files to ship.
//! Labels and descriptions are arbitrary marketing copy, so escaping by
//! default matters.
//!
//! ## Validation Rejects, Never Drops
//!
//! [`validate`] fails the whole table on the first shape violation rather
//! than skipping the bad entry. A build that fails loudly beats a production
//! menu that is silently missing links.

pub mod data;
pub mod output;
pub mod render;
pub mod surface;
pub mod types;
pub mod validate;
