//! Shared UI crate: the side navigation panel and the views that embed it.

pub mod nav;
pub mod theme;
pub mod views;

pub mod components {
    // Side navigation panel (components/side_navigation.rs)
    pub mod side_navigation;
    pub use side_navigation::NavPanel;
    pub use side_navigation::SideNavigation;
    pub use side_navigation::SideNavigationStyles;
    pub use side_navigation::SIDE_NAV_CSS_INLINE;
}
