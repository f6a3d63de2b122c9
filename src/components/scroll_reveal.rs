//! Scroll-triggered reveal wrapper.
//!
//! Wraps content that animates in the first time it scrolls into view.
//! Phases live in the shared [`codex_core::RevealSet`] so the transition
//! stays one-way per page load; under reduced motion everything renders
//! revealed immediately.

use codex_core::RevealKind;
use dioxus::prelude::*;

use crate::context::{use_motion, use_reveals};

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    /// Stable id within the page, used to track the one-way phase
    pub id: String,
    #[props(default = RevealKind::Fade)]
    pub kind: RevealKind,
    pub children: Element,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let motion = use_motion();
    let mut reveals = use_reveals();

    {
        let id = props.id.clone();
        use_effect(move || {
            reveals.write().observe(id.clone());
        });
    }

    let revealed = motion().reduced_motion || reveals.read().is_revealed(&props.id);
    let class = if revealed {
        format!("{} revealed", props.kind.class())
    } else {
        props.kind.class().to_string()
    };

    let id = props.id.clone();
    rsx! {
        div {
            class: "{class}",
            onvisible: move |evt| {
                let intersecting = evt.data().is_intersecting().unwrap_or(false);
                if reveals.write().on_intersection(&id, intersecting) {
                    tracing::trace!(id = %id, "element revealed");
                }
            },
            {props.children}
        }
    }
}
