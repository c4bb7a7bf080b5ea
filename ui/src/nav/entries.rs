//! Fixed navigation entries, grouped into the MENU and GENERAL sections.

use dioxus::prelude::*;

use super::NavError;

/// Id of the entry selected on a fresh mount.
pub const DEFAULT_ENTRY_ID: &str = "dashboard";

const DASHBOARD_ICON: Asset = asset!("/assets/icons/dashboard.svg");
const DASHBOARD_ICON_ACTIVE: Asset = asset!("/assets/icons/dashboard-active.svg");
const ASSET_ICON: Asset = asset!("/assets/icons/asset.svg");
const ASSET_ICON_ACTIVE: Asset = asset!("/assets/icons/asset-active.svg");
const ANALYTICS_ICON: Asset = asset!("/assets/icons/analytics.svg");
const ANALYTICS_ICON_ACTIVE: Asset = asset!("/assets/icons/analytics-active.svg");
const HISTORY_ICON: Asset = asset!("/assets/icons/history.svg");
const HISTORY_ICON_ACTIVE: Asset = asset!("/assets/icons/history-active.svg");
const NEWS_ICON: Asset = asset!("/assets/icons/news.svg");
const NEWS_ICON_ACTIVE: Asset = asset!("/assets/icons/news-active.svg");
const HELP_ICON: Asset = asset!("/assets/icons/help.svg");
const HELP_ICON_ACTIVE: Asset = asset!("/assets/icons/help-active.svg");
const SETTINGS_ICON: Asset = asset!("/assets/icons/settings.svg");
const SETTINGS_ICON_ACTIVE: Asset = asset!("/assets/icons/settings-active.svg");
const LOGOUT_ICON: Asset = asset!("/assets/icons/logout.svg");
const LOGOUT_ICON_ACTIVE: Asset = asset!("/assets/icons/logout-active.svg");

/// One clickable row in the panel.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Asset,
    pub active_icon: Asset,
    /// Selecting this entry asks the host to log out instead of navigating.
    pub emits_logout: bool,
}

impl MenuEntry {
    const fn page(id: &'static str, label: &'static str, icon: Asset, active_icon: Asset) -> Self {
        Self {
            id,
            label,
            icon,
            active_icon,
            emits_logout: false,
        }
    }

    /// Icon variant to show for the given selection state.
    pub fn icon_for(&self, active: bool) -> Asset {
        if active {
            self.active_icon
        } else {
            self.icon
        }
    }
}

/// A titled group of entries rendered as one list.
#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub title: &'static str,
    pub entries: &'static [MenuEntry],
}

const MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry::page("dashboard", "Dashboard", DASHBOARD_ICON, DASHBOARD_ICON_ACTIVE),
    MenuEntry::page("asset", "My Asset", ASSET_ICON, ASSET_ICON_ACTIVE),
    MenuEntry::page("analytics", "Analytics", ANALYTICS_ICON, ANALYTICS_ICON_ACTIVE),
    MenuEntry::page("history", "History", HISTORY_ICON, HISTORY_ICON_ACTIVE),
    MenuEntry::page("news", "News", NEWS_ICON, NEWS_ICON_ACTIVE),
];

const GENERAL_ENTRIES: &[MenuEntry] = &[
    MenuEntry::page("help", "Help", HELP_ICON, HELP_ICON_ACTIVE),
    MenuEntry::page("settings", "Settings", SETTINGS_ICON, SETTINGS_ICON_ACTIVE),
    MenuEntry {
        id: "logout",
        label: "Logout",
        icon: LOGOUT_ICON,
        active_icon: LOGOUT_ICON_ACTIVE,
        emits_logout: true,
    },
];

/// Sections in display order.
pub const SECTIONS: &[NavSection] = &[
    NavSection {
        title: "MENU",
        entries: MENU_ENTRIES,
    },
    NavSection {
        title: "GENERAL",
        entries: GENERAL_ENTRIES,
    },
];

/// Every entry across all sections, in display order.
pub fn all() -> impl Iterator<Item = &'static MenuEntry> {
    SECTIONS.iter().flat_map(|section| section.entries.iter())
}

pub fn find(id: &str) -> Option<&'static MenuEntry> {
    all().find(|entry| entry.id == id)
}

/// Like [`find`], for ids arriving from outside the panel.
pub fn lookup(id: &str) -> Result<&'static MenuEntry, NavError> {
    find(id).ok_or_else(|| NavError::UnknownEntry(id.to_string()))
}
