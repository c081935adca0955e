use dioxus::prelude::*;
use playerdash_core::{basic_info_lines, slot_view};

use crate::app::use_app_state;
use crate::components::MarkupText;

/// Full item detail overlay, opened by clicking a slot. Shows the
/// rendered name, the translated type, and either the item's lore or
/// a basic type/durability/amount summary.
#[component]
pub fn ItemModal() -> Element {
    let mut state = use_app_state();
    let item = state.modal_item.read();
    let Some(item) = item.as_ref() else {
        return rsx! {};
    };

    let mapping = state.mapping.read();
    let Some(view) = slot_view(item, &mapping) else {
        return rsx! {};
    };
    let type_name = mapping.translate(&item.item_type, item.durability).to_string();
    let fallback_lines = basic_info_lines(item);

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| state.modal_item.set(None),
            div {
                class: "item-modal",
                onclick: move |event| event.stop_propagation(),
                button {
                    class: "modal-close",
                    onclick: move |_| state.modal_item.set(None),
                    "\u{00d7}"
                }
                div { class: "modal-header",
                    img { class: "modal-icon", src: "{view.icon_url}" }
                    div {
                        h3 { class: "modal-title",
                            MarkupText { spans: view.title.clone() }
                        }
                        span { class: "modal-type", "{type_name}" }
                    }
                }
                div { class: "modal-body",
                    if view.lore.is_empty() {
                        for (index, line) in fallback_lines.iter().enumerate() {
                            div { key: "{index}", class: "modal-info-line", "{line}" }
                        }
                    } else {
                        for (index, line) in view.lore.iter().enumerate() {
                            div { key: "{index}", class: "modal-lore-line",
                                MarkupText { spans: line.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
