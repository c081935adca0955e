use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use playerdash_core::{Rect, TipSize, place, slot_view};
use playerdash_types::ItemStack;

use crate::app::use_app_state;
use crate::components::MarkupText;

fn element_rect(id: &str) -> Option<Rect> {
    let document = web_sys::window()?.document()?;
    let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
    Some(Rect {
        top: rect.top(),
        left: rect.left(),
        width: rect.width(),
        height: rect.height(),
    })
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// One slot cell: icon, quantity badge and a hover tooltip. The
/// tooltip is rendered hidden first, measured after a layout pass,
/// then positioned by the shared placement routine. Clicking a filled
/// slot opens the item modal.
#[component]
pub fn ItemSlot(slot_key: String, item: Option<ItemStack>, label: Option<String>) -> Element {
    let mut state = use_app_state();
    let mapping = state.mapping.read();
    let view = item.as_ref().and_then(|item| slot_view(item, &mapping));

    let slot_id = format!("slot-{slot_key}");
    let tip_id = format!("tip-{slot_key}");
    let mut tip_visible = use_signal(|| false);
    let mut tip_style = use_signal(String::new);
    let mut tip_below = use_signal(|| false);

    let has_item = view.is_some();
    let clicked_item = item.clone();

    let enter_slot_id = slot_id.clone();
    let enter_tip_id = tip_id.clone();
    let on_enter = move |_| {
        if !has_item {
            return;
        }
        tip_visible.set(true);
        tip_style.set(String::new());
        let slot_id = enter_slot_id.clone();
        let tip_id = enter_tip_id.clone();
        spawn(async move {
            // let the tooltip lay out before measuring it
            TimeoutFuture::new(0).await;
            let Some(slot_rect) = element_rect(&slot_id) else {
                return;
            };
            let Some(tip_rect) = element_rect(&tip_id) else {
                return;
            };
            let tip = TipSize {
                width: tip_rect.width,
                height: tip_rect.height,
            };
            let placement = place(&slot_rect, &tip, viewport_width());
            tip_below.set(placement.below);
            tip_style.set(format!(
                "top: {}px; left: {}px;",
                placement.top, placement.center_x
            ));
        });
    };

    let tooltip_class = if tip_below() {
        "slot-tooltip below"
    } else {
        "slot-tooltip"
    };
    // hidden while measuring so the first frame never flashes at 0,0
    let tooltip_style = if tip_style.read().is_empty() {
        "visibility: hidden;".to_string()
    } else {
        tip_style.read().clone()
    };

    rsx! {
        div {
            id: "{slot_id}",
            class: if has_item { "item-slot has-item" } else { "item-slot" },
            onmouseenter: on_enter,
            onmouseleave: move |_| {
                tip_visible.set(false);
                tip_style.set(String::new());
            },
            onclick: move |_| {
                if has_item {
                    state.modal_item.set(clicked_item.clone());
                }
            },

            if let Some(label) = &label {
                span { class: "slot-label", "{label}" }
            }

            if let Some(view) = &view {
                div {
                    class: "item-icon",
                    style: "background-image: url('{view.icon_url}');",
                }
                if let Some(badge) = view.badge {
                    span { class: "item-count", "{badge}" }
                }
                if tip_visible() {
                    div {
                        id: "{tip_id}",
                        class: "{tooltip_class}",
                        style: "{tooltip_style}",
                        div { class: "tooltip-title",
                            MarkupText { spans: view.title.clone() }
                        }
                        for (index, line) in view.lore.iter().enumerate() {
                            div { key: "{index}", class: "tooltip-lore",
                                MarkupText { spans: line.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
