//! Article page: one wiki entry with breadcrumbs, cascading themes, a
//! section TOC, and scroll-driven behavior.
//!
//! Scroll geometry comes from the content pane's mounted handle. Section
//! extents are measured lazily on the first scroll event after all section
//! elements have mounted, then reused until the page changes.

use std::rc::Rc;

use codex_core::effects::reading_time_minutes;
use codex_core::hierarchy::SITE_ROOT_MARKER;
use codex_core::navigation::{active_section, SectionSpan};
use codex_core::theme::{badge_nodes, root_classes};
use codex_core::{PageSection, RevealKind, RevealSet, ScrollTracker, ThemeNode};
use dioxus::html::geometry::ScrollBehavior;
use dioxus::prelude::*;
use pulldown_cmark::{Options, Parser};

use crate::app::Route;
use crate::components::{
    Breadcrumb, MobileNav, Reveal, ScrollToTop, ThemeBadges, ThemeIndicator, WikiSidebar,
};
use crate::context::{use_menu, use_reveals, use_root_theme, use_site, RootThemeClasses};

#[component]
pub fn Article(slug: String) -> Element {
    let site = use_site();
    let mut menu = use_menu();
    let mut reveals = use_reveals();
    let mut theme_classes = use_root_theme();

    let mut tracker = use_signal(ScrollTracker::new);
    let mut show_to_top = use_signal(|| false);
    let mut active = use_signal(|| None::<String>);
    let mut sections_geom = use_signal(Vec::<SectionSpan>::new);
    let mut section_handles = use_signal(Vec::<(String, Rc<MountedData>)>::new);
    let mut pane = use_signal(|| None::<Rc<MountedData>>);
    let mut top_anchor = use_signal(|| None::<Rc<MountedData>>);

    // Per-page state resets when the route parameter changes, and the
    // page's theme cascade is pushed onto the shell.
    use_effect(use_reactive!(|slug| {
        let site = site();
        let levels = site
            .registry
            .get(&slug)
            .map(|p| p.levels.clone())
            .unwrap_or_default();
        let themes = site.themes.active_themes(&levels);
        let classes: Vec<String> = root_classes(&themes)
            .into_iter()
            .map(str::to_string)
            .collect();
        theme_classes.set(RootThemeClasses(classes));

        reveals.set(RevealSet::new());
        tracker.set(ScrollTracker::new());
        show_to_top.set(false);
        active.set(None);
        sections_geom.set(Vec::new());
        section_handles.set(Vec::new());
        menu.write().close();
        tracing::info!(page = %slug, "article opened");
    }));

    let site_arc = site();
    let Some(page) = site_arc.registry.get(&slug).cloned() else {
        return rsx! {
            main { class: "wiki-content",
                div { class: "not-found",
                    h1 { "This page is lost to the archive" }
                    p { "No entry named \"{slug}\" exists in the Codex." }
                    Link { to: Route::Landing {}, class: "sidebar-back-btn", "Return to the gates" }
                }
            }
        };
    };

    let resolved = site_arc.hierarchy.resolve_path(&page.levels);
    let icon = resolved
        .last()
        .map(|n| n.icon.clone())
        .unwrap_or_else(|| "✦".to_string());
    let current_path = {
        let url = resolved.last().map(|n| n.url.as_str()).unwrap_or("index.html");
        format!("/{SITE_ROOT_MARKER}/{url}")
    };
    let crumbs = site_arc.hierarchy.breadcrumbs(&page.levels, &current_path);

    let active_refs = site_arc.themes.active_themes(&page.levels);
    let badges: Vec<ThemeNode> = badge_nodes(&active_refs).into_iter().cloned().collect();
    let indicator: Vec<ThemeNode> = active_refs.into_iter().cloned().collect();

    let reading_mins = reading_time_minutes(&page.body_text());
    let toc: Vec<(String, String)> = page
        .sections
        .iter()
        .map(|s| (s.id.clone(), s.title.clone()))
        .collect();

    let on_scroll = move |_| {
        let Some(el) = pane() else { return };
        spawn(async move {
            let (Ok(offset), Ok(size), Ok(rect)) = (
                el.get_scroll_offset().await,
                el.get_scroll_size().await,
                el.get_client_rect().await,
            ) else {
                return;
            };

            let update = tracker.write().on_scroll(offset.y, size.height, rect.size.height);
            show_to_top.set(update.show_to_top);
            for milestone in update.crossed_milestones {
                tracing::info!(depth_pct = milestone, "scroll depth milestone");
            }

            // Section extents are measured once the handles are all in
            if sections_geom().len() != section_handles().len() {
                let mut spans = Vec::new();
                for (id, handle) in section_handles() {
                    if let Ok(r) = handle.get_client_rect().await {
                        spans.push(SectionSpan {
                            id,
                            top: r.origin.y - rect.origin.y + offset.y,
                            height: r.size.height,
                        });
                    }
                }
                spans.sort_by(|a, b| a.top.total_cmp(&b.top));
                sections_geom.set(spans);
            }

            let geom = sections_geom();
            active.set(active_section(offset.y, &geom).map(str::to_string));
        });
    };

    let on_section_mounted = move |(id, el): (String, Rc<MountedData>)| {
        section_handles.write().push((id, el));
    };

    let on_section = move |id: String| {
        menu.write().close();
        let found = section_handles().into_iter().find(|(sid, _)| *sid == id);
        if let Some((_, el)) = found {
            spawn(async move {
                if let Err(e) = el.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::warn!(error = %e, "scroll to section failed");
                }
            });
        }
    };

    let scroll_top = move |_| {
        if let Some(anchor) = top_anchor() {
            spawn(async move {
                if let Err(e) = anchor.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::warn!(error = %e, "scroll to top failed");
                }
            });
        }
    };

    rsx! {
        div { class: "wiki-layout",
            ThemeIndicator { active: indicator }
            MobileNav {}
            WikiSidebar {
                current: slug.clone(),
                sections: toc,
                active_section: active(),
                on_section,
            }

            main {
                class: "wiki-content",
                onmounted: move |evt| pane.set(Some(evt.data())),
                onscroll: on_scroll,
                onclick: move |_| {
                    if menu.write().on_outside_click(false, false) {
                        tracing::debug!("sidebar closed by outside tap");
                    }
                },

                div {
                    class: "top-anchor",
                    onmounted: move |evt| top_anchor.set(Some(evt.data())),
                }

                Breadcrumb { crumbs }
                ThemeBadges { badges }

                header { class: "page-header",
                    span { class: "page-icon", "{icon}" }
                    h1 { class: "page-title", "{page.title}" }
                    if !page.summary.is_empty() {
                        p { class: "page-summary", "{page.summary}" }
                    }
                }

                // Appears alongside the to-top button once the reader is
                // deep enough to have lost the header
                if show_to_top() {
                    div { class: "reading-time", "📖 {reading_mins} min read" }
                }

                for (i, section) in page.sections.iter().cloned().enumerate() {
                    ArticleSection {
                        section,
                        index: i,
                        on_mounted: on_section_mounted,
                    }
                }

                ScrollToTop { visible: show_to_top(), on_click: scroll_top }
            }
        }
    }
}

/// One reveal-wrapped page section. The Markdown body is rendered to HTML
/// up front; the mounted handle flows back up for scroll-spy measurement.
#[component]
fn ArticleSection(
    section: PageSection,
    index: usize,
    on_mounted: EventHandler<(String, Rc<MountedData>)>,
) -> Element {
    let html = render_markdown(&section.body);
    let anchor = section.id.clone();

    rsx! {
        Reveal { id: "section-{section.id}", kind: RevealKind::for_panel(index),
            section {
                id: "{section.id}",
                class: "main-section",
                onmounted: move |evt| on_mounted.call((anchor.clone(), evt.data())),
                h2 { class: "section-heading", "{section.title}" }
                div { class: "section-body", dangerous_inner_html: "{html}" }
            }
        }
    }
}

/// Markdown to HTML with the table and strikethrough extensions.
fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);
    let mut html = String::with_capacity(source.len() * 2);
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}
