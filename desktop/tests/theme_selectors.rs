#![cfg(test)]
/*!
Selector lint for the side navigation stylesheet.

The panel markup (`ui/src/components/side_navigation.rs`) and the workspace views
rely on these classes. If a refactor renames one, update the markup, the
stylesheet, and REQUIRED_SELECTORS together.

A substring presence check is enough here; no CSS parser is pulled in.
*/

use ui::components::SIDE_NAV_CSS_INLINE;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors the panel markup depends on.
const PANEL_SELECTORS: &[&str] = &[
    ".side-navigation {",
    ".nav-background {",
    ".nav-section {",
    ".section-title",
    ".nav-list {",
    ".nav-item {",
    ".nav-item.active",
    ".nav-indicator",
    ".nav-icon {",
    ".nav-icon.active-icon",
    ".nav-text",
    // Collapsed layout for narrow windows
    "@media (max-width: 720px)",
];

/// Selectors the workspace views depend on.
const THEME_SELECTORS: &[&str] = &[
    ":root",
    ".workspace {",
    ".workspace__content",
    ".page {",
    ".page__hint",
    ".page--missing",
    ".signed-out",
    ".button--primary",
];

fn missing(css: &str, selectors: &[&'static str]) -> Vec<&'static str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn panel_stylesheet_contains_required_selectors() {
    let missing = missing(SIDE_NAV_CSS_INLINE, PANEL_SELECTORS);
    if !missing.is_empty() {
        panic!(
            "Missing {} required selectors in side_navigation.css:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, THEME_SELECTORS);
    if !missing.is_empty() {
        panic!(
            "Missing {} required selectors in theme/main.css:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn active_styles_follow_base_styles() {
    // `.nav-item.active` must come after `.nav-item {` to win the cascade.
    let base = SIDE_NAV_CSS_INLINE.find(".nav-item {");
    let active = SIDE_NAV_CSS_INLINE.find(".nav-item.active");
    match (base, active) {
        (Some(base), Some(active)) => assert!(
            base < active,
            "`.nav-item.active` is declared before `.nav-item {{`"
        ),
        _ => panic!("nav item selectors missing (base: {base:?}, active: {active:?})"),
    }
}
