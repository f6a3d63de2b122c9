//! Gateway cards on the landing page, with the 3D tilt effect.

use codex_core::effects::Tilt;
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_motion;

#[derive(Props, Clone, PartialEq)]
pub struct GatewayCardProps {
    pub page_key: String,
    pub title: String,
    pub icon: String,
    pub summary: String,
    pub style_class: String,
}

/// Card linking to a realm page. Tips toward the pointer on capable
/// viewports; inert under reduced motion or on small screens.
#[component]
pub fn GatewayCard(props: GatewayCardProps) -> Element {
    let navigator = use_navigator();
    let motion = use_motion();

    let mut tilt: Signal<Option<Tilt>> = use_signal(|| None);
    // Card size is needed to center the tilt; measured once on mount.
    let mut dims = use_signal(|| (0.0_f64, 0.0_f64));

    let style = match tilt() {
        Some(t) => format!("transform: {};", t.transform()),
        None => String::new(),
    };

    let key = props.page_key.clone();
    rsx! {
        div {
            class: "gateway-card gateway-card--{props.style_class}",
            class: if tilt().is_some() { "tilt-active" },
            style: "{style}",
            onmounted: move |evt| {
                let el = evt.data();
                spawn(async move {
                    if let Ok(rect) = el.get_client_rect().await {
                        dims.set((rect.size.width, rect.size.height));
                    }
                });
            },
            onmousemove: move |evt| {
                if !motion().effects_enabled() {
                    return;
                }
                let (width, height) = dims();
                let point = evt.element_coordinates();
                tilt.set(Some(Tilt::at(point.x, point.y, width, height)));
            },
            onmouseleave: move |_| tilt.set(None),
            onclick: move |_| {
                navigator.push(Route::Article { slug: key.clone() });
            },

            span { class: "gateway-card__icon", "{props.icon}" }
            h3 { class: "gateway-card__title", "{props.title}" }
            p { class: "gateway-card__summary", "{props.summary}" }
        }
    }
}
