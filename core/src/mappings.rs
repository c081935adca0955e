//! Item icon and translation mapping tables.
//!
//! Two key -> value tables loaded from plain-text config resources
//! (`key=value` lines). Loads are additive: later successful loads
//! merge over earlier ones, last write wins per key, the tables are
//! never replaced wholesale. Lookups probe `TYPE:VARIANT` before the
//! bare `TYPE` and fall back to a fixed default icon or the identity
//! name.

use hashbrown::HashMap;

/// Icon served when an item type has no mapping (the barrier "no"
/// sign).
pub const DEFAULT_ICON: &str = "barrier.png";

/// URL prefix for item icon files.
pub const ITEM_ICON_BASE_PATH: &str = "./img/items/";

/// Parse a `key=value` table. `#`-prefixed and blank lines are
/// skipped; keys and values are trimmed.
pub fn parse_table(text: &str) -> HashMap<String, String> {
    let mut table = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            table.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    table
}

/// Process-wide icon/translation mapping state, owned by the resource
/// resolver and passed by reference to lookups.
#[derive(Debug, Default, Clone)]
pub struct ConfigMapping {
    icons: HashMap<String, String>,
    translations: HashMap<String, String>,
}

impl ConfigMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge an icon table over the current one (last write wins).
    pub fn merge_icons(&mut self, table: HashMap<String, String>) {
        self.icons.extend(table);
    }

    /// Merge a translation table over the current one.
    pub fn merge_translations(&mut self, table: HashMap<String, String>) {
        self.translations.extend(table);
    }

    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    pub fn translation_count(&self) -> usize {
        self.translations.len()
    }

    /// Icon filename for `(type, variant)`. The variant (item
    /// durability/damage value) participates only when positive.
    pub fn icon_file(&self, item_type: &str, variant: i32) -> &str {
        if let Some(found) = self.probe(&self.icons, item_type, variant) {
            return found;
        }
        DEFAULT_ICON
    }

    /// Full icon URL for `(type, variant)`.
    pub fn icon_url(&self, item_type: &str, variant: i32) -> String {
        format!("{ITEM_ICON_BASE_PATH}{}", self.icon_file(item_type, variant))
    }

    /// Translated display name for `(type, variant)`, falling back to
    /// the bare type string.
    pub fn translate<'a>(&'a self, item_type: &'a str, variant: i32) -> &'a str {
        self.probe(&self.translations, item_type, variant)
            .unwrap_or(item_type)
    }

    fn probe<'a>(
        &self,
        table: &'a HashMap<String, String>,
        item_type: &str,
        variant: i32,
    ) -> Option<&'a str> {
        if variant > 0
            && let Some(value) = table.get(&format!("{item_type}:{variant}"))
        {
            return Some(value);
        }
        table.get(item_type).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping_with(icons: &str, translations: &str) -> ConfigMapping {
        let mut mapping = ConfigMapping::new();
        mapping.merge_icons(parse_table(icons));
        mapping.merge_translations(parse_table(translations));
        mapping
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let table = parse_table("# header\n\nDIAMOND_SWORD=diamond_sword.png\n  \nSTONE = stone.png\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table["DIAMOND_SWORD"], "diamond_sword.png");
        assert_eq!(table["STONE"], "stone.png");
    }

    #[test]
    fn unknown_type_gets_default_icon() {
        let mapping = ConfigMapping::new();
        assert_eq!(mapping.icon_file("UNOBTAINIUM", 0), DEFAULT_ICON);
        assert_eq!(
            mapping.icon_url("UNOBTAINIUM", 0),
            "./img/items/barrier.png"
        );
    }

    #[test]
    fn variant_key_preferred_over_bare_type() {
        let mapping = mapping_with(
            "WOOL=wool.png\nWOOL:14=wool_red.png\n",
            "WOOL=Wool\nWOOL:14=Red Wool\n",
        );
        assert_eq!(mapping.icon_file("WOOL", 14), "wool_red.png");
        assert_eq!(mapping.icon_file("WOOL", 3), "wool.png");
        assert_eq!(mapping.icon_file("WOOL", 0), "wool.png");
        assert_eq!(mapping.translate("WOOL", 14), "Red Wool");
        assert_eq!(mapping.translate("WOOL", 0), "Wool");
    }

    #[test]
    fn translate_falls_back_to_type_string() {
        let mapping = ConfigMapping::new();
        assert_eq!(mapping.translate("GOLD_INGOT", 0), "GOLD_INGOT");
    }

    #[test]
    fn merge_is_additive_last_write_wins() {
        let mut mapping = ConfigMapping::new();
        mapping.merge_icons(parse_table("A=a1.png\nB=b.png\n"));
        mapping.merge_icons(parse_table("A=a2.png\nC=c.png\n"));
        assert_eq!(mapping.icon_file("A", 0), "a2.png");
        assert_eq!(mapping.icon_file("B", 0), "b.png");
        assert_eq!(mapping.icon_file("C", 0), "c.png");
    }
}
