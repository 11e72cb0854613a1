//! Page chrome: header navigation, footer, theme and scroll state.

mod footer;
mod header;
pub mod navigation;
pub mod theme;

pub use footer::{Footer, ScrollToTop};
pub use header::Header;
pub use navigation::{NAV_ITEMS, NavItem, NavigationContext, active_section};
pub use theme::{ThemeContext, ThemeMode, apply_theme, detect_theme};
