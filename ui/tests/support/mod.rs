//! Helpers for driving a `VirtualDom` from integration tests: render to HTML,
//! find click targets in the emitted mutations, and dispatch synthetic clicks.

#![allow(dead_code)]

use std::any::Any;
use std::rc::Rc;

use dioxus_core::{ElementId, Event, Mutation, Mutations, VirtualDom};
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
};

/// Element ids carrying an `onclick` listener, in document order.
pub fn click_targets(mutations: &Mutations) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
            _ => None,
        })
        .collect()
}

/// Mounts the dom and returns its initial click targets.
pub fn mount(dom: &mut VirtualDom) -> Vec<ElementId> {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let mutations = dom.rebuild_to_vec();
    click_targets(&mutations)
}

/// Clicks `target`, then flushes the resulting re-render.
///
/// Returns the click targets created by that re-render.
pub fn click(dom: &mut VirtualDom, target: ElementId) -> Vec<ElementId> {
    let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("click", event, target);
    let mutations = dom.render_immediate_to_vec();
    click_targets(&mutations)
}

pub fn html(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}

/// Text of each `.nav-text` span whose row carries `active`.
pub fn active_labels(html: &str) -> Vec<String> {
    html.split("<li ")
        .skip(1)
        .filter(|row| row.starts_with("class=\"nav-item active\""))
        .filter_map(|row| {
            let start = row.find("class=\"nav-text\">")? + "class=\"nav-text\">".len();
            let end = row[start..].find('<')?;
            Some(row[start..start + end].to_string())
        })
        .collect()
}
