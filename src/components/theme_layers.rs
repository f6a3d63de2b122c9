//! Theme cascade display: indicator bar and badges.
//!
//! Both consume the active theme set computed by `codex_core::theme` and
//! render nothing at all when they have nothing to show.

use codex_core::ThemeNode;
use dioxus::prelude::*;

/// Thin bar with one colored segment per active theme layer, outermost
/// level first.
#[component]
pub fn ThemeIndicator(active: Vec<ThemeNode>) -> Element {
    if active.is_empty() {
        return rsx! {};
    }

    let segments: Vec<(String, String, String)> = active
        .iter()
        .map(|node| {
            (
                format!("theme-indicator__segment theme-indicator__{}", node.class_suffix()),
                format!("background: {};", node.color),
                node.name.clone(),
            )
        })
        .collect();

    rsx! {
        div { class: "theme-indicator",
            for (class, style, name) in segments {
                div { class: "{class}", style: "{style}", title: "{name}" }
            }
        }
    }
}

/// One badge per active layer beyond the two fixed base layers. The whole
/// container disappears when no such layer is active.
#[component]
pub fn ThemeBadges(badges: Vec<ThemeNode>) -> Element {
    if badges.is_empty() {
        return rsx! {};
    }

    let items: Vec<(String, String, String)> = badges
        .iter()
        .map(|node| {
            (
                format!("theme-badge theme-badge--{}", node.class_suffix()),
                format!("border-color: {color}; color: {color};", color = node.color),
                node.name.clone(),
            )
        })
        .collect();

    rsx! {
        div { class: "theme-badges",
            for (class, style, name) in items {
                span { class: "{class}", style: "{style}", "{name}" }
            }
        }
    }
}
