//! Breadcrumb trail component.
//!
//! Renders the resolved trail from `codex_core::hierarchy`: every entry is
//! a link except the last, which is plain text marked current. Separators
//! sit between every pair. The trail is replaced wholesale on each render,
//! so re-invocation with the same input is idempotent.

use codex_core::hierarchy::TRAIL_SEPARATOR;
use codex_core::Crumb;
use dioxus::prelude::*;

use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct BreadcrumbProps {
    /// Resolved trail, Home first
    pub crumbs: Vec<Crumb>,
}

#[component]
pub fn Breadcrumb(props: BreadcrumbProps) -> Element {
    rsx! {
        nav { class: "breadcrumb", "aria-label": "Breadcrumb",
            for (i, crumb) in props.crumbs.iter().cloned().enumerate() {
                if i > 0 {
                    span { class: "breadcrumb__separator", "aria-hidden": "true", "{TRAIL_SEPARATOR}" }
                }
                if crumb.is_current {
                    div {
                        class: "breadcrumb__item breadcrumb__item--{crumb.style_class} breadcrumb__item--current",
                        span { class: "breadcrumb__icon", "{crumb.icon}" }
                        span { "{crumb.label}" }
                    }
                } else {
                    CrumbLink { crumb }
                }
            }
        }
    }
}

/// One clickable trail entry. The href is the real relative link the static
/// site would use; clicks route in-app instead.
#[component]
fn CrumbLink(crumb: Crumb) -> Element {
    let navigator = use_navigator();
    let key = crumb.key.clone();

    rsx! {
        div { class: "breadcrumb__item breadcrumb__item--{crumb.style_class}",
            a {
                class: "breadcrumb__link",
                href: "{crumb.href}",
                onclick: move |evt| {
                    evt.prevent_default();
                    navigator.push(route_for(&key));
                },
                span { class: "breadcrumb__icon", "{crumb.icon}" }
                span { "{crumb.label}" }
            }
        }
    }
}

/// Crumb keys map onto routes; the synthetic Home entry goes to landing.
fn route_for(key: &str) -> Route {
    if key == "home" {
        Route::Landing {}
    } else {
        Route::Article { slug: key.to_string() }
    }
}
