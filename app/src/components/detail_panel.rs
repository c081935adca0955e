use dioxus::prelude::*;
use playerdash_core::{EquipSlot, armor_by_slot, inventory_display_order};
use playerdash_types::PlayerDetail;

use crate::app::{close_player_detail, use_app_state};
use crate::components::ItemSlot;

fn health_color(percent: f64) -> &'static str {
    if percent <= 20.0 {
        "#f44336"
    } else if percent <= 50.0 {
        "#ff9800"
    } else {
        "#4caf50"
    }
}

#[component]
fn StatusSection(detail: PlayerDetail) -> Element {
    let percent = detail.health_percent();
    let color = health_color(percent);
    let loc = &detail.location;

    rsx! {
        div { class: "status-section",
            div { class: "status-row",
                span { class: "status-label", "Level" }
                span { "{detail.level}" }
            }
            div { class: "status-row",
                span { class: "status-label", "Health" }
                div { class: "health-bar",
                    div {
                        class: "health-bar-fill",
                        style: "width: {percent}%; background-color: {color};",
                    }
                }
                span { class: "health-text",
                    {format!("{:.1} / {:.1}", detail.health, detail.max_health)}
                }
            }
            div { class: "status-row",
                span { class: "status-label", "Location" }
                span { {format!("{:.1}, {:.1}, {:.1}", loc.x, loc.y, loc.z)} }
            }
        }
    }
}

#[component]
fn EquipmentSection(detail: PlayerDetail) -> Element {
    let armor = armor_by_slot(&detail.armor);

    rsx! {
        div { class: "equipment-section",
            div { class: "equipment-grid",
                for slot in EquipSlot::ALL {
                    ItemSlot {
                        slot_key: format!("armor-{}", slot.css_class()),
                        item: armor[slot.display_index()].cloned(),
                        label: slot.label().to_string(),
                    }
                }
            }
            div { class: "hands-grid",
                ItemSlot {
                    slot_key: "main-hand".to_string(),
                    item: detail.main_hand.clone(),
                    label: "Main Hand".to_string(),
                }
                ItemSlot {
                    slot_key: "off-hand".to_string(),
                    item: detail.off_hand.clone(),
                    label: "Off Hand".to_string(),
                }
            }
        }
    }
}

#[component]
fn InventorySection(detail: PlayerDetail) -> Element {
    rsx! {
        div { class: "inventory-section",
            h4 { "Inventory" }
            // pack rows first, hotbar as the last row
            div { class: "inventory-grid",
                for index in inventory_display_order() {
                    ItemSlot {
                        slot_key: format!("inv-{index}"),
                        item: detail.inventory.get(index).cloned().flatten(),
                    }
                }
            }
        }
    }
}

#[component]
fn ExtensionSection(detail: PlayerDetail) -> Element {
    if detail.extension_items.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "extension-section",
            h4 { "Extension Items" }
            div { class: "extension-grid",
                for (key, item) in detail.extension_items.iter() {
                    ItemSlot {
                        slot_key: format!("ext-{key}"),
                        item: Some(item.clone()),
                        label: key.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn PlaceholderSection(detail: PlayerDetail) -> Element {
    let entries = detail.placeholders.entries();
    if entries.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "placeholder-section",
            h4 { "Stats" }
            for (index, entry) in entries.iter().enumerate() {
                div { key: "{index}", class: "placeholder-row",
                    span { class: "placeholder-label", "{entry.label()}" }
                    span { class: "placeholder-value",
                        {entry.value.as_deref().unwrap_or("-")}
                    }
                }
            }
        }
    }
}

/// Detail view for one player. While open, all scheduled polling is
/// suspended; closing triggers a catch-up refresh when the roster has
/// gone stale.
#[component]
pub fn DetailPanel() -> Element {
    let state = use_app_state();
    let selected = state.selected_player.read();
    let Some(player) = selected.as_deref() else {
        return rsx! {};
    };

    let status = state.detail_status.read();
    let detail = state.detail.read();

    rsx! {
        section { class: "detail-panel",
            header { class: "detail-header",
                button {
                    class: "detail-back",
                    onclick: move |_| close_player_detail(state),
                    "\u{2190} Back"
                }
                h3 { "{player}" }
            }
            if let Some(status) = status.as_deref() {
                div { class: "detail-status", "{status}" }
            }
            if let Some(detail) = detail.as_ref() {
                StatusSection { detail: detail.clone() }
                EquipmentSection { detail: detail.clone() }
                InventorySection { detail: detail.clone() }
                ExtensionSection { detail: detail.clone() }
                PlaceholderSection { detail: detail.clone() }
            }
        }
    }
}
