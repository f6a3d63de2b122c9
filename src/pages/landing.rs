//! Landing page - the gates of the Eternal Codex.
//!
//! Title, tagline, and one gateway card per featured realm. Honors the
//! `--page` startup flag by redirecting once on mount.

use codex_core::{CodexError, RevealKind};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{GatewayCard, Reveal};
use crate::context::{use_root_theme, use_site, RootThemeClasses};

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let site = use_site();
    let mut theme_classes = use_root_theme();

    use_effect(move || {
        // The landing page carries only the base styling
        theme_classes.set(RootThemeClasses::default());

        if let Some(page) = crate::startup().page {
            if site().registry.get(&page).is_some() {
                tracing::info!(page = %page, "opening start page");
                navigator.push(Route::Article { slug: page });
            } else {
                tracing::warn!(
                    error = %CodexError::PageNotFound(page),
                    "start page not in registry, staying on landing"
                );
            }
        }
    });

    let site_arc = site();
    let cards: Vec<(String, String, String, String, String)> = site_arc
        .registry
        .gateways()
        .map(|page| {
            let node = page.levels.last().and_then(|k| site_arc.hierarchy.get(k));
            (
                page.key.clone(),
                page.title.clone(),
                node.map(|n| n.icon.clone()).unwrap_or_else(|| "✦".to_string()),
                page.summary.clone(),
                node.map(|n| n.style_class.clone()).unwrap_or_else(|| "celestial".to_string()),
            )
        })
        .collect();

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "codex-title", "The Eternal Codex" }
                p { class: "tagline",
                    "The Sacred Archive of the Celestial Dominion of Visurena"
                }
                p { class: "epigraph",
                    em { "\"May the Flame Eternal burn until the last word is written.\"" }
                }
            }

            Reveal { id: "gateways", kind: RevealKind::Fade,
                section { class: "gateway-grid",
                    for (page_key, title, icon, summary, style_class) in cards {
                        GatewayCard { page_key, title, icon, summary, style_class }
                    }
                }
            }
        }
    }
}
