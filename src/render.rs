//! HTML preview rendering for the two menu surfaces.
//!
//! Reference consumer of the [`surface`](crate::surface) views: renders the
//! header nav (with dropdowns and use-case cards), the footer sections, and a
//! standalone preview document combining both. The real site brings its own
//! framework; these previews exist so the table can be eyeballed and so the
//! view contract has an executable consumer.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating:
//! type-safe, auto-escaped interpolation, no runtime template files.

use crate::surface::{footer_sections, nav_children, top_level_nav_items};
use crate::types::{Cta, NavItem};
use maud::{DOCTYPE, Markup, html};

const CSS: &str = include_str!("../static/preview.css");

/// Renders the header nav: nav-visible items plus the trailing CTA button.
///
/// An item with an `href` renders as a plain link. A linkless item renders as
/// a dropdown trigger over its nav-visible children; children with a
/// `description` render as cards.
pub fn render_nav(table: &[NavItem], cta: &Cta) -> Markup {
    html! {
        nav.site-nav {
            ul.nav-list {
                @for item in top_level_nav_items(table) {
                    (render_nav_item(item))
                }
            }
            a.cta-button href=(cta.href) { (cta.label) }
        }
    }
}

/// Renders a single header nav entry (link or dropdown).
fn render_nav_item(item: &NavItem) -> Markup {
    let dropdown = nav_children(item);

    html! {
        li.nav-item {
            @if let Some(href) = &item.href {
                a href=(href) { (item.label) }
            } @else {
                span.nav-trigger { (item.label) }
            }
            @if !dropdown.is_empty() {
                ul.nav-dropdown {
                    @for child in dropdown {
                        li.dropdown-entry {
                            a href=[child.href.as_deref()] {
                                @if let Some(image) = &child.image {
                                    img.entry-image src=(image) alt=(child.label) loading="lazy";
                                }
                                span.entry-label { (child.label) }
                                @if let Some(description) = &child.description {
                                    p.entry-description { (description) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the footer: one section per footer-visible item.
///
/// A section heading links when the item has an `href`; a heading with zero
/// footer-visible children still renders, just without a link list.
pub fn render_footer(table: &[NavItem]) -> Markup {
    html! {
        footer.site-footer {
            @for section in footer_sections(table) {
                section.footer-section {
                    @if let Some(href) = &section.item.href {
                        h3 { a href=(href) { (section.item.label) } }
                    } @else {
                        h3 { (section.item.label) }
                    }
                    @if !section.children.is_empty() {
                        ul {
                            @for child in &section.children {
                                li {
                                    a href=[child.href.as_deref()] { (child.label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders a standalone preview document with both surfaces.
pub fn render_preview(table: &[NavItem], cta: &Cta) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Navigation preview" }
                style { (CSS) }
            }
            body {
                header.site-header {
                    (render_nav(table, cta))
                }
                main.preview-note {
                    p { "Header and footer menus rendered from the navigation table." }
                }
                (render_footer(table))
            }
        }
    }
}
