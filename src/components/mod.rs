//! UI components for the Eternal Codex wiki.

mod breadcrumb;
mod gateway_card;
mod mobile_nav;
mod scroll_reveal;
mod scroll_to_top;
mod sidebar;
mod theme_layers;

pub use breadcrumb::Breadcrumb;
pub use gateway_card::GatewayCard;
pub use mobile_nav::MobileNav;
pub use scroll_reveal::Reveal;
pub use scroll_to_top::ScrollToTop;
pub use sidebar::WikiSidebar;
pub use theme_layers::{ThemeBadges, ThemeIndicator};
