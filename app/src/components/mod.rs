mod detail_panel;
mod item_modal;
mod item_slot;
mod markup_text;
mod player_list;
mod server_selector;

pub use detail_panel::DetailPanel;
pub use item_modal::ItemModal;
pub use item_slot::ItemSlot;
pub use markup_text::MarkupText;
pub use player_list::PlayerList;
pub use server_selector::ServerSelector;
