//! Selection state for the side panel.
//!
//! Selecting any entry moves the highlight to it. What the host hears about
//! depends on the entry: a [`NavIntent::Navigate`] carrying the id, or a bare
//! [`NavIntent::Logout`] for the logout entry.

use super::entries::{self, MenuEntry, DEFAULT_ENTRY_ID};
use super::NavError;

/// What a selection asks the embedding application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Navigate(&'static str),
    Logout,
}

/// The single active entry id. Starts on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSelection {
    active: &'static str,
}

impl Default for NavSelection {
    fn default() -> Self {
        Self {
            active: DEFAULT_ENTRY_ID,
        }
    }
}

impl NavSelection {
    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn select(&mut self, entry: &'static MenuEntry) -> NavIntent {
        self.active = entry.id;
        if entry.emits_logout {
            NavIntent::Logout
        } else {
            NavIntent::Navigate(entry.id)
        }
    }

    /// Select by id. Unknown ids leave the selection untouched.
    pub fn select_id(&mut self, id: &str) -> Result<NavIntent, NavError> {
        let entry = entries::lookup(id)?;
        Ok(self.select(entry))
    }
}
