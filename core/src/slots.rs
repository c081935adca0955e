//! Slot descriptors and grid layout.
//!
//! Rendering is a pure function from an `ItemStack` plus the config
//! mapping to a `SlotView`; the frontend binds descriptors to slot
//! cells. Also owns the fixed inventory display order and the
//! armor-to-equipment-slot routing.

use playerdash_types::ItemStack;

use crate::mappings::ConfigMapping;
use crate::markup::{Span, render};

/// Inventory slot count (indices 0-35 map 1:1 to grid cells).
pub const INVENTORY_SIZE: usize = 36;

/// Everything a slot cell needs to render one item.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub icon_url: String,
    /// Quantity badge, present only when the stack holds more than
    /// one item.
    pub badge: Option<u32>,
    /// Tooltip/modal title: the item's explicit name, or its
    /// translated type name, rendered through the markup renderer.
    pub title: Vec<Span>,
    /// One rendered span list per lore line.
    pub lore: Vec<Vec<Span>>,
}

/// Build the slot descriptor for an item. `None` means an empty cell
/// (missing item or the AIR placeholder).
pub fn slot_view(item: &ItemStack, mapping: &ConfigMapping) -> Option<SlotView> {
    if item.is_empty() {
        return None;
    }
    let title = match &item.name {
        Some(name) => name.clone(),
        None => mapping.translate(&item.item_type, item.durability).to_string(),
    };
    Some(SlotView {
        icon_url: mapping.icon_url(&item.item_type, item.durability),
        badge: (item.amount > 1).then_some(item.amount),
        title: render(&title),
        lore: item.lore.iter().map(|line| render(line)).collect(),
    })
}

/// Fallback lines for the item detail modal when an item has no lore:
/// type, durability (when positive) and amount (when above one).
pub fn basic_info_lines(item: &ItemStack) -> Vec<String> {
    let mut lines = vec![format!("Type: {}", item.item_type)];
    if item.durability > 0 {
        lines.push(format!("Durability: {}", item.durability));
    }
    if item.amount > 1 {
        lines.push(format!("Amount: {}", item.amount));
    }
    lines
}

/// Inventory indices in on-screen order: the main pack (9-35) as
/// three rows of nine, then the hotbar (0-8) as the fourth row.
pub fn inventory_display_order() -> impl Iterator<Item = usize> {
    (9..INVENTORY_SIZE).chain(0..9)
}

/// The four fixed equipment slots, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipSlot {
    Helmet,
    Chestplate,
    Leggings,
    Boots,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 4] = [
        EquipSlot::Helmet,
        EquipSlot::Chestplate,
        EquipSlot::Leggings,
        EquipSlot::Boots,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EquipSlot::Helmet => "Helmet",
            EquipSlot::Chestplate => "Chestplate",
            EquipSlot::Leggings => "Leggings",
            EquipSlot::Boots => "Boots",
        }
    }

    /// Index into arrays ordered like [`EquipSlot::ALL`].
    pub fn display_index(&self) -> usize {
        match self {
            EquipSlot::Helmet => 0,
            EquipSlot::Chestplate => 1,
            EquipSlot::Leggings => 2,
            EquipSlot::Boots => 3,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            EquipSlot::Helmet => "helmet",
            EquipSlot::Chestplate => "chestplate",
            EquipSlot::Leggings => "leggings",
            EquipSlot::Boots => "boots",
        }
    }
}

/// Guess the equipment slot from the item's type name. Covers both
/// vanilla names (DIAMOND_HELMET) and common custom-item spellings.
pub fn detect_equip_slot(item: &ItemStack) -> Option<EquipSlot> {
    let ty = item.item_type.to_lowercase();
    if ["helmet", "cap", "skull", "head"].iter().any(|k| ty.contains(k)) {
        return Some(EquipSlot::Helmet);
    }
    if ["chestplate", "tunic", "vest", "chest"].iter().any(|k| ty.contains(k)) {
        return Some(EquipSlot::Chestplate);
    }
    if ["leggings", "pants", "leg"].iter().any(|k| ty.contains(k)) {
        return Some(EquipSlot::Leggings);
    }
    if ["boots", "shoes", "foot"].iter().any(|k| ty.contains(k)) {
        return Some(EquipSlot::Boots);
    }
    None
}

/// Wire order of the armor array: boots first, helmet last.
fn slot_for_armor_index(index: usize) -> Option<EquipSlot> {
    match index {
        0 => Some(EquipSlot::Boots),
        1 => Some(EquipSlot::Leggings),
        2 => Some(EquipSlot::Chestplate),
        3 => Some(EquipSlot::Helmet),
        _ => None,
    }
}

/// Route the armor array onto the four equipment slots, preferring
/// the type-name heuristic and falling back to the fixed wire order.
/// Returns entries indexed by `EquipSlot::ALL` order.
pub fn armor_by_slot(armor: &[Option<ItemStack>]) -> [Option<&ItemStack>; 4] {
    let mut slots: [Option<&ItemStack>; 4] = [None; 4];
    for (index, entry) in armor.iter().take(4).enumerate() {
        let Some(item) = entry else { continue };
        if item.is_empty() {
            continue;
        }
        let slot = detect_equip_slot(item).or_else(|| slot_for_armor_index(index));
        if let Some(slot) = slot {
            slots[slot.display_index()] = Some(item);
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappings::parse_table;

    fn stack(item_type: &str) -> ItemStack {
        ItemStack {
            item_type: item_type.to_string(),
            amount: 1,
            durability: 0,
            name: None,
            lore: Vec::new(),
        }
    }

    fn mapping() -> ConfigMapping {
        let mut m = ConfigMapping::new();
        m.merge_icons(parse_table("DIAMOND_SWORD=diamond_sword.png\n"));
        m.merge_translations(parse_table("DIAMOND_SWORD=Diamond Sword\n"));
        m
    }

    #[test]
    fn air_and_empty_yield_no_view() {
        let m = mapping();
        assert!(slot_view(&stack("AIR"), &m).is_none());
        assert!(slot_view(&stack(""), &m).is_none());
    }

    #[test]
    fn view_uses_explicit_name_over_translation() {
        let m = mapping();
        let mut item = stack("DIAMOND_SWORD");
        item.name = Some("§bExcalibur".to_string());
        let view = slot_view(&item, &m).unwrap();
        assert_eq!(view.title[0].text, "Excalibur");
        assert_eq!(view.title[0].css.as_deref(), Some("color: #55FFFF"));
        assert_eq!(view.icon_url, "./img/items/diamond_sword.png");
        assert!(view.badge.is_none());
    }

    #[test]
    fn view_falls_back_to_translated_name() {
        let m = mapping();
        let view = slot_view(&stack("DIAMOND_SWORD"), &m).unwrap();
        assert_eq!(view.title, vec![crate::markup::render("Diamond Sword")[0].clone()]);
    }

    #[test]
    fn badge_only_above_one() {
        let m = mapping();
        let mut item = stack("DIAMOND_SWORD");
        item.amount = 64;
        assert_eq!(slot_view(&item, &m).unwrap().badge, Some(64));
        item.amount = 1;
        assert!(slot_view(&item, &m).unwrap().badge.is_none());
    }

    #[test]
    fn basic_info_omits_defaults() {
        let mut item = stack("DIAMOND_SWORD");
        assert_eq!(basic_info_lines(&item), vec!["Type: DIAMOND_SWORD"]);
        item.durability = 12;
        item.amount = 3;
        assert_eq!(
            basic_info_lines(&item),
            vec!["Type: DIAMOND_SWORD", "Durability: 12", "Amount: 3"]
        );
    }

    #[test]
    fn display_order_is_pack_then_hotbar() {
        let order: Vec<usize> = inventory_display_order().collect();
        assert_eq!(order.len(), INVENTORY_SIZE);
        assert_eq!(order[0], 9);
        assert_eq!(order[26], 35);
        assert_eq!(order[27], 0);
        assert_eq!(order[35], 8);
    }

    #[test]
    fn armor_routing_prefers_name_heuristics() {
        // A chestplate sitting in the boots position still lands in
        // the chestplate slot.
        let armor = vec![Some(stack("DIAMOND_CHESTPLATE")), None, None, None];
        let routed = armor_by_slot(&armor);
        assert!(routed[0].is_none()); // helmet
        assert!(routed[1].is_some()); // chestplate
        assert!(routed[3].is_none()); // boots
    }

    #[test]
    fn armor_routing_falls_back_to_wire_order() {
        let armor = vec![
            Some(stack("MYSTERY_ITEM")),
            None,
            None,
            Some(stack("OTHER_MYSTERY")),
        ];
        let routed = armor_by_slot(&armor);
        assert!(routed[3].is_some()); // index 0 -> boots
        assert!(routed[0].is_some()); // index 3 -> helmet
    }

    #[test]
    fn custom_spellings_detected() {
        assert_eq!(detect_equip_slot(&stack("IRON_CAP")), Some(EquipSlot::Helmet));
        assert_eq!(
            detect_equip_slot(&stack("LEATHER_TUNIC")),
            Some(EquipSlot::Chestplate)
        );
        assert_eq!(detect_equip_slot(&stack("CHAIN_PANTS")), Some(EquipSlot::Leggings));
        assert_eq!(detect_equip_slot(&stack("OLD_SHOES")), Some(EquipSlot::Boots));
        assert_eq!(detect_equip_slot(&stack("STICK")), None);
    }
}
