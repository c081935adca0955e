pub mod error;
pub mod mappings;
pub mod markup;
pub mod poll;
pub mod resolver;
pub mod slots;
pub mod tooltip;

// Re-exports for convenience
pub use error::{ApiError, ResourceError};
pub use mappings::{ConfigMapping, DEFAULT_ICON, ITEM_ICON_BASE_PATH, parse_table};
pub use markup::{Span, render};
pub use poll::{
    DRIVER_TICK_MS, DueFeeds, EpochCounter, INTERACTION_GRACE_MS, PLAYER_LIST_INTERVAL_MS,
    PLAYER_LIST_RETRY_MS, PollScheduler, REQUEST_TIMEOUT_MS, SERVER_LIST_INTERVAL_MS,
    SERVER_LIST_RETRY_MS, ViewState,
};
pub use resolver::{
    CANDIDATE_BASE_PATHS, FALLBACK_BASE_PATH, ICON_TABLE, TRANSLATION_TABLE, TextFetcher,
    load_config_tables,
};
pub use slots::{
    EquipSlot, SlotView, armor_by_slot, basic_info_lines, inventory_display_order, slot_view,
};
pub use tooltip::{EDGE_MARGIN, Placement, Rect, TipSize, place};
