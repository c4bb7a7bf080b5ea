//! Navigation model shared by the side panel and the views embedding it.

pub mod entries;
mod selection;

pub use entries::{MenuEntry, NavSection, DEFAULT_ENTRY_ID, SECTIONS};
pub use selection::{NavIntent, NavSelection};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("no navigation entry with id `{0}`")]
    UnknownEntry(String),
}
