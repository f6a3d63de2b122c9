//! Mobile navigation toggle.
//!
//! Hamburger button plus the tap-to-close overlay behind the open panel.
//! Hidden on desktop widths via CSS; the breakpoint-resize close lives in
//! the shell's resize handler.

use dioxus::prelude::*;

use crate::context::use_menu;

#[component]
pub fn MobileNav() -> Element {
    let mut menu = use_menu();
    let open = menu().is_open();

    rsx! {
        button {
            class: if open { "mobile-menu-toggle active" } else { "mobile-menu-toggle" },
            "aria-label": "Toggle navigation menu",
            "aria-expanded": "{open}",
            onclick: move |evt| {
                // Keep the outside-click handler from seeing this click
                evt.stop_propagation();
                menu.write().toggle();
            },
            span {}
            span {}
            span {}
        }

        if open {
            div {
                class: "mobile-overlay active",
                onclick: move |_| {
                    menu.write().on_outside_click(false, false);
                },
            }
        }
    }
}
