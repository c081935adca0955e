//! Shared API data model for playerdash
//!
//! This crate contains the serializable wire types returned by the
//! game-server status API, shared between playerdash-core and the
//! WASM frontend (playerdash-app).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ─────────────────────────────────────────────────────────────────────────────
// Server List Types
// ─────────────────────────────────────────────────────────────────────────────

/// One backend server as reported by `GET /api/servers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub name: String,
    #[serde(rename = "playerCount", default)]
    pub player_count: i64,
}

/// Response envelope for `GET /api/servers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerListResponse {
    #[serde(default)]
    pub servers: Vec<ServerEntry>,
}

impl ServerListResponse {
    /// Total online players across ALL servers, including empty ones.
    pub fn total_player_count(&self) -> i64 {
        self.servers.iter().map(|s| s.player_count.max(0)).sum()
    }

    /// Servers that currently have at least one player online.
    /// The selector only lists populated servers.
    pub fn populated(&self) -> Vec<ServerEntry> {
        self.servers
            .iter()
            .filter(|s| s.player_count >= 1)
            .cloned()
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Player List Types
// ─────────────────────────────────────────────────────────────────────────────

/// One entry of `GET /api/players`. The API emits either a bare name
/// string or a `{ "name": ... }` object depending on backend version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerEntry {
    Name(String),
    Object { name: String },
}

impl PlayerEntry {
    pub fn name(&self) -> &str {
        match self {
            PlayerEntry::Name(name) => name,
            PlayerEntry::Object { name } => name,
        }
    }
}

/// Response envelope for `GET /api/players?server=NAME`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerListResponse {
    #[serde(default)]
    pub players: Vec<PlayerEntry>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Player Detail Types
// ─────────────────────────────────────────────────────────────────────────────

/// A world position inside the detail payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

/// Immutable snapshot of one item stack from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default = "default_amount")]
    pub amount: u32,
    #[serde(default)]
    pub durability: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub lore: Vec<String>,
}

fn default_amount() -> u32 {
    1
}

impl ItemStack {
    /// An empty slot is serialized as `AIR` (or with no type at all).
    pub fn is_empty(&self) -> bool {
        self.item_type.is_empty() || self.item_type == "AIR"
    }
}

/// One resolved placeholder row shown in the detail view.
/// Older backends label rows with `id`, newer ones with `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl Placeholder {
    pub fn label(&self) -> &str {
        self.id
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("unnamed")
    }
}

/// Placeholder payload shape: either a flat array or nested one level
/// under a `placeholders` key. Both occur in the wild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceholderPayload {
    Flat(Vec<Placeholder>),
    Nested { placeholders: Vec<Placeholder> },
}

impl Default for PlaceholderPayload {
    fn default() -> Self {
        PlaceholderPayload::Flat(Vec::new())
    }
}

impl PlaceholderPayload {
    pub fn entries(&self) -> &[Placeholder] {
        match self {
            PlaceholderPayload::Flat(entries) => entries,
            PlaceholderPayload::Nested { placeholders } => placeholders,
        }
    }
}

/// Full detail payload of `GET /api/player/{name}?server=NAME`.
///
/// Armor and inventory slots may be null (empty slot). Extension-mod
/// items arrive under the single standardized `extensionItems` key as
/// a label -> item map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub health: f64,
    #[serde(rename = "maxHealth", default)]
    pub max_health: f64,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub armor: Vec<Option<ItemStack>>,
    #[serde(default)]
    pub inventory: Vec<Option<ItemStack>>,
    #[serde(rename = "mainHand", default)]
    pub main_hand: Option<ItemStack>,
    #[serde(rename = "offHand", default)]
    pub off_hand: Option<ItemStack>,
    #[serde(default)]
    pub placeholders: PlaceholderPayload,
    #[serde(rename = "extensionItems", default)]
    pub extension_items: BTreeMap<String, ItemStack>,
    /// Backend-reported lookup failure (player went offline, etc.).
    #[serde(default)]
    pub error: Option<String>,
}

impl PlayerDetail {
    /// Health as a 0-100 percentage, clamped.
    pub fn health_percent(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health * 100.0).clamp(0.0, 100.0)
    }
}
