//! Global stylesheet, assembled at startup.
//!
//! The fixed rules live in one static block; the `:root` palette and the
//! per-House accent rules are formatted from [`super::colors`] and the
//! theme table so colors are defined in exactly one place.

use std::fmt::Write;

use codex_core::ThemeTable;

use super::colors;

/// Build the full stylesheet injected at the app root.
pub fn global_styles() -> String {
    let mut css = format!(
        ":root {{\n  --gold: {gold};\n  --gold-dark: {gold_dark};\n  --night: {night};\n  --night-panel: {panel};\n  --night-edge: {edge};\n  --parchment: {parchment};\n  --parchment-dim: {dim};\n  --accent: {gold};\n}}\n",
        gold = colors::GOLD,
        gold_dark = colors::GOLD_DARK,
        night = colors::NIGHT,
        panel = colors::NIGHT_PANEL,
        edge = colors::NIGHT_EDGE,
        parchment = colors::PARCHMENT,
        dim = colors::PARCHMENT_DIM,
    );

    // One accent override per themed layer, plus the matching breadcrumb
    // icon tint. Base layers with no body class contribute nothing here.
    let table = ThemeTable::codex();
    for node in table.iter() {
        if !node.body_class.is_empty() {
            let _ = writeln!(
                css,
                ".codex-root.{class} {{ --accent: {color}; }}",
                class = node.body_class,
                color = node.color,
            );
        }
        let _ = writeln!(
            css,
            ".breadcrumb__item--{suffix} .breadcrumb__icon {{ color: {color}; }}",
            suffix = node.class_suffix(),
            color = node.color,
        );
        let _ = writeln!(
            css,
            ".gateway-card--{suffix}:hover {{ border-color: {color}; }}",
            suffix = node.class_suffix(),
            color = node.color,
        );
    }

    css.push_str(BASE_CSS);
    css
}

const BASE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

.codex-root {
  width: 100vw;
  height: 100vh;
  overflow: hidden;
  background: radial-gradient(ellipse at top, #10162b 0%, var(--night) 60%);
  color: var(--parchment);
  font-family: Georgia, 'Palatino Linotype', serif;
  outline: none;
  position: relative;
}

/* Cursor glow */
.cursor-glow {
  position: fixed;
  width: 320px;
  height: 320px;
  border-radius: 50%;
  pointer-events: none;
  background: radial-gradient(circle, rgba(255, 215, 0, 0.07) 0%, transparent 65%);
  z-index: 40;
}

/* Konami pulse */
.egg-pulse {
  animation: flame-pulse 1.6s ease-in-out;
}
@keyframes flame-pulse {
  0%, 100% { filter: none; }
  30% { filter: brightness(1.35) saturate(1.4) hue-rotate(-12deg); }
  60% { filter: brightness(1.15) saturate(1.2); }
}

/* Landing */
.landing {
  height: 100%;
  overflow-y: auto;
  padding: 4rem 2rem;
}
.landing-header { text-align: center; margin-bottom: 3.5rem; }
.codex-title {
  font-size: 3rem;
  letter-spacing: 0.35rem;
  color: var(--gold);
  text-shadow: 0 0 24px rgba(255, 215, 0, 0.35);
}
.tagline { margin-top: 0.75rem; color: var(--parchment-dim); letter-spacing: 0.1rem; }
.epigraph { margin-top: 1.5rem; color: var(--gold-dark); }

.gateway-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
  max-width: 1100px;
  margin: 0 auto;
}

/* Gateway cards */
.gateway-card {
  background: var(--night-panel);
  border: 1px solid var(--night-edge);
  border-radius: 10px;
  padding: 2rem 1.5rem;
  cursor: pointer;
  text-align: center;
  transition: transform 0.25s ease, border-color 0.25s ease, box-shadow 0.25s ease;
}
.gateway-card.tilt-active {
  border-color: var(--gold-dark);
  box-shadow: 0 16px 40px rgba(0, 0, 0, 0.5);
  transition: border-color 0.25s ease, box-shadow 0.25s ease;
}
.gateway-card__icon { font-size: 2.4rem; display: block; }
.gateway-card__title { margin: 0.9rem 0 0.5rem; color: var(--gold); font-size: 1.2rem; }
.gateway-card__summary { color: var(--parchment-dim); font-size: 0.92rem; line-height: 1.5; }

/* Article layout */
.wiki-layout {
  display: flex;
  height: 100%;
}
.wiki-content {
  flex: 1;
  overflow-y: auto;
  padding: 2.5rem 3rem 5rem;
  position: relative;
  scroll-behavior: smooth;
}
.top-anchor { position: absolute; top: 0; }

/* Sidebar */
.wiki-sidebar {
  width: 260px;
  flex-shrink: 0;
  background: var(--night-panel);
  border-right: 1px solid var(--night-edge);
  padding: 1.5rem 1.25rem;
  overflow-y: auto;
}
.sidebar-back-btn {
  background: none;
  border: 1px solid var(--night-edge);
  border-radius: 6px;
  color: var(--parchment);
  padding: 0.45rem 0.9rem;
  cursor: pointer;
  font-family: inherit;
}
.sidebar-back-btn:hover { border-color: var(--accent); color: var(--accent); }
.toc { margin-top: 1.75rem; }
.toc-heading {
  font-size: 0.78rem;
  text-transform: uppercase;
  letter-spacing: 0.12rem;
  color: var(--parchment-dim);
  margin-bottom: 0.6rem;
}
.toc-link, .sidebar-link {
  display: block;
  padding: 0.35rem 0.5rem;
  color: var(--parchment);
  text-decoration: none;
  border-left: 2px solid transparent;
  font-size: 0.95rem;
}
.toc-link:hover, .sidebar-link:hover { color: var(--accent); }
.toc-link.active, .sidebar-link.active {
  color: var(--accent);
  border-left-color: var(--accent);
}
.sidebar-pages { margin-top: 1.75rem; }

/* Mobile toggle and overlay */
.mobile-menu-toggle {
  display: none;
  position: fixed;
  top: 1rem;
  left: 1rem;
  z-index: 60;
  width: 42px;
  height: 38px;
  background: var(--night-panel);
  border: 1px solid var(--night-edge);
  border-radius: 6px;
  cursor: pointer;
  padding: 8px 9px;
  flex-direction: column;
  justify-content: space-between;
}
.mobile-menu-toggle span {
  display: block;
  height: 2px;
  background: var(--gold);
  transition: transform 0.25s ease, opacity 0.25s ease;
}
.mobile-menu-toggle.active span:nth-child(1) { transform: translateY(9px) rotate(45deg); }
.mobile-menu-toggle.active span:nth-child(2) { opacity: 0; }
.mobile-menu-toggle.active span:nth-child(3) { transform: translateY(-9px) rotate(-45deg); }
.mobile-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.55);
  z-index: 45;
}

/* Breadcrumb */
.breadcrumb {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.4rem;
  margin-bottom: 1.25rem;
  font-size: 0.9rem;
}
.breadcrumb__separator { color: var(--parchment-dim); }
.breadcrumb__item { display: inline-flex; align-items: center; gap: 0.3rem; }
.breadcrumb__item--current { color: var(--accent); }
.breadcrumb__link {
  color: var(--parchment-dim);
  text-decoration: none;
  display: inline-flex;
  align-items: center;
  gap: 0.3rem;
}
.breadcrumb__link:hover { color: var(--accent); }

/* Theme indicator and badges */
.theme-indicator {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 4px;
  display: flex;
  z-index: 50;
}
.theme-indicator__segment { flex: 1; }
.theme-badges {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}
.theme-badge {
  border: 1px solid;
  border-radius: 999px;
  padding: 0.2rem 0.75rem;
  font-size: 0.78rem;
  letter-spacing: 0.05rem;
}

/* Page header */
.page-header { margin-bottom: 2.5rem; }
.page-icon { font-size: 2rem; }
.page-title { color: var(--accent); font-size: 2.2rem; margin: 0.4rem 0; }
.page-summary { color: var(--parchment-dim); font-style: italic; }
.reading-time {
  position: fixed;
  bottom: 1.5rem;
  left: 1.5rem;
  padding: 0.4rem 0.9rem;
  border: 1px solid var(--night-edge);
  border-radius: 999px;
  background: var(--night-panel);
  font-size: 0.85rem;
  color: var(--parchment-dim);
  z-index: 55;
}

/* Sections */
.main-section { margin-bottom: 3rem; max-width: 760px; }
.section-heading {
  color: var(--accent);
  font-size: 1.5rem;
  border-bottom: 1px solid var(--night-edge);
  padding-bottom: 0.4rem;
  margin-bottom: 1rem;
}
.section-body { line-height: 1.7; }
.section-body p { margin-bottom: 1rem; }
.section-body em { color: var(--gold-dark); }
.section-body strong { color: var(--gold); }
.section-body blockquote {
  border-left: 3px solid var(--accent);
  padding: 0.25rem 0 0.25rem 1rem;
  margin: 1.25rem 0;
  color: var(--parchment-dim);
  font-style: italic;
}
.section-body table {
  border-collapse: collapse;
  margin: 1.25rem 0;
  width: 100%;
}
.section-body th, .section-body td {
  border: 1px solid var(--night-edge);
  padding: 0.5rem 0.75rem;
  text-align: left;
}
.section-body th { color: var(--gold); background: var(--night-panel); }

/* Scroll reveals */
.scroll-reveal, .scroll-reveal-left, .scroll-reveal-right, .scroll-reveal-scale {
  opacity: 0;
  transition: opacity 0.7s ease, transform 0.7s ease;
}
.scroll-reveal { transform: translateY(28px); }
.scroll-reveal-left { transform: translateX(-40px); }
.scroll-reveal-right { transform: translateX(40px); }
.scroll-reveal-scale { transform: scale(0.92); }
.scroll-reveal.revealed,
.scroll-reveal-left.revealed,
.scroll-reveal-right.revealed,
.scroll-reveal-scale.revealed {
  opacity: 1;
  transform: none;
}

/* Scroll to top */
.scroll-to-top {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 1px solid var(--gold-dark);
  background: var(--night-panel);
  color: var(--gold);
  font-size: 1.2rem;
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity 0.3s ease;
  z-index: 55;
}
.scroll-to-top.visible { opacity: 1; pointer-events: auto; }
.scroll-to-top:hover { border-color: var(--gold); }

/* Not found */
.not-found { max-width: 520px; margin: 6rem auto; text-align: center; }
.not-found h1 { color: var(--gold); margin-bottom: 1rem; }
.not-found p { color: var(--parchment-dim); margin-bottom: 1.5rem; }

@media (max-width: 768px) {
  .mobile-menu-toggle { display: flex; }
  .wiki-sidebar {
    position: fixed;
    top: 0;
    bottom: 0;
    left: 0;
    z-index: 50;
    transform: translateX(-100%);
    transition: transform 0.3s ease;
  }
  .wiki-sidebar.mobile-open { transform: translateX(0); }
  .wiki-content { padding: 4rem 1.25rem 5rem; }
  .codex-title { font-size: 2rem; }
}
"#;
