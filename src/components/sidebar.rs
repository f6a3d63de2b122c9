//! Wiki sidebar: section TOC, archive index, and back control.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_menu, use_site};

#[derive(Props, Clone, PartialEq)]
pub struct WikiSidebarProps {
    /// Key of the page being shown
    pub current: String,
    /// Section anchors of the current page: (id, title)
    pub sections: Vec<(String, String)>,
    /// Section currently scrolled into view
    pub active_section: Option<String>,
    /// Scroll the content pane to the given section anchor
    pub on_section: EventHandler<String>,
}

/// Sidebar panel. Always visible on desktop; slides in over the content on
/// mobile widths while the shared menu state is open.
#[component]
pub fn WikiSidebar(props: WikiSidebarProps) -> Element {
    let navigator = use_navigator();
    let mut menu = use_menu();
    let site = use_site();

    let pages: Vec<(String, String)> = site()
        .registry
        .iter()
        .map(|p| (p.key.clone(), p.title.clone()))
        .collect();

    let back = move |_| {
        if navigator.can_go_back() {
            navigator.go_back();
        } else {
            navigator.push(Route::Landing {});
        }
    };

    rsx! {
        aside {
            class: if menu().is_open() { "wiki-sidebar mobile-open" } else { "wiki-sidebar" },
            // Clicks inside the panel are not outside clicks
            onclick: move |evt| evt.stop_propagation(),

            button { class: "sidebar-back-btn", onclick: back, "← Back" }

            if !props.sections.is_empty() {
                div { class: "toc",
                    h3 { class: "toc-heading", "On this page" }
                    for (id, title) in props.sections.iter().cloned() {
                        TocLink {
                            active: props.active_section.as_deref() == Some(id.as_str()),
                            id,
                            title,
                            on_select: props.on_section,
                        }
                    }
                }
            }

            div { class: "sidebar-pages",
                h3 { class: "toc-heading", "The Archive" }
                for (key, title) in pages {
                    Link {
                        to: Route::Article { slug: key.clone() },
                        class: if key == props.current { "sidebar-link active" } else { "sidebar-link" },
                        onclick: move |_| menu.write().close(),
                        "{title}"
                    }
                }
            }
        }
    }
}

#[component]
fn TocLink(id: String, title: String, active: bool, on_select: EventHandler<String>) -> Element {
    let anchor = id.clone();

    rsx! {
        a {
            class: if active { "toc-link active" } else { "toc-link" },
            href: "#{id}",
            onclick: move |evt| {
                evt.prevent_default();
                on_select.call(anchor.clone());
            },
            "{title}"
        }
    }
}
