//! Scroll-to-top button.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ScrollToTopProps {
    /// Shown once the pane has scrolled past the threshold
    pub visible: bool,
    pub on_click: EventHandler<()>,
}

#[component]
pub fn ScrollToTop(props: ScrollToTopProps) -> Element {
    rsx! {
        button {
            class: if props.visible { "scroll-to-top visible" } else { "scroll-to-top" },
            "aria-label": "Scroll to top",
            onclick: move |_| props.on_click.call(()),
            "↑"
        }
    }
}
