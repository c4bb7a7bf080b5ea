//! Shared application theme (layout, colours, and the variables the panel reads).

use dioxus::prelude::*;

pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
