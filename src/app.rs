use std::sync::Arc;

use codex_core::effects::{CursorPosition, MotionPrefs};
use codex_core::{KonamiTracker, MenuState, RevealSet};
use dioxus::prelude::*;

use crate::context::{
    use_egg, use_menu, use_motion, use_root_theme, EggActive, RootThemeClasses, SharedSite,
    SiteConfig,
};
use crate::pages::{Article, Landing};
use crate::theme::global_styles;

/// Application routes.
///
/// - `/` - landing page with gateway cards
/// - `/codex/:key` - one wiki article
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/codex/:slug")]
    Article { slug: String },
}

/// Root application component.
///
/// Provides global styles, the immutable site tables, and the shared
/// signals the shell and pages coordinate through.
#[component]
pub fn App() -> Element {
    let site: Signal<SharedSite> = use_signal(|| Arc::new(SiteConfig::load()));
    use_context_provider(|| site);

    let motion: Signal<MotionPrefs> = use_signal(|| MotionPrefs {
        reduced_motion: crate::startup().reduced_motion,
        ..MotionPrefs::default()
    });
    use_context_provider(|| motion);

    // Sidebar state is shared: the article page renders the panel, the
    // shell handles escape and resize.
    let menu: Signal<MenuState> = use_signal(MenuState::default);
    use_context_provider(|| menu);

    let reveals: Signal<RevealSet> = use_signal(RevealSet::new);
    use_context_provider(|| reveals);

    let theme_classes: Signal<RootThemeClasses> = use_signal(RootThemeClasses::default);
    use_context_provider(|| theme_classes);

    let egg: Signal<EggActive> = use_signal(EggActive::default);
    use_context_provider(|| egg);

    let styles = use_signal(global_styles);

    rsx! {
        style { {styles} }
        CodexShell {}
    }
}

/// Root layout element.
///
/// Carries the cascading theme classes and owns window-level event wiring:
/// escape and breakpoint-resize close the sidebar, keydowns feed the konami
/// tracker, and pointer moves drive the cursor glow.
#[component]
fn CodexShell() -> Element {
    let mut motion = use_motion();
    let mut menu = use_menu();
    let theme_classes = use_root_theme();
    let mut egg = use_egg();

    let mut konami = use_signal(KonamiTracker::new);
    let mut cursor = use_signal(CursorPosition::default);

    let on_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Escape {
            if menu.write().on_escape() {
                tracing::debug!("sidebar closed via escape");
            }
            return;
        }
        if let Some(token) = key_token(&evt.key()) {
            if konami.write().record(&token) {
                tracing::info!("secret activated: the First Flame burns brighter");
                egg.set(EggActive(true));
            }
        }
    };

    let on_resize = move |evt: Event<ResizeData>| {
        if let Ok(size) = evt.data().get_content_box_size() {
            motion.write().viewport_width = size.width;
            if menu.write().on_viewport_resize(size.width) {
                tracing::debug!(width = size.width, "sidebar closed by resize");
            }
        }
    };

    let classes = theme_classes().0.join(" ");
    let shell_class = if egg().0 {
        format!("codex-root {classes} egg-pulse")
    } else {
        format!("codex-root {classes}")
    };

    rsx! {
        div {
            class: "{shell_class}",
            tabindex: "0",
            onkeydown: on_keydown,
            onresize: on_resize,
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                cursor.set(CursorPosition { x: point.x, y: point.y });
            },
            // The pulse class comes off once its animation finishes
            onanimationend: move |_| egg.set(EggActive(false)),

            if motion().effects_enabled() {
                div { class: "cursor-glow", style: "{cursor().glow_style()}" }
            }

            Router::<Route> {}
        }
    }
}

/// Map a keyboard key to the token names the konami tracker matches on.
fn key_token(key: &Key) -> Option<String> {
    match key {
        Key::ArrowUp => Some("ArrowUp".to_string()),
        Key::ArrowDown => Some("ArrowDown".to_string()),
        Key::ArrowLeft => Some("ArrowLeft".to_string()),
        Key::ArrowRight => Some("ArrowRight".to_string()),
        Key::Character(c) => Some(c.to_lowercase()),
        _ => None,
    }
}
