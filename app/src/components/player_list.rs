use dioxus::prelude::*;

use crate::app::{open_player_detail, use_app_state};

/// Player roster for the selected server. A click opens the detail
/// panel, which suspends polling until it is closed.
#[component]
pub fn PlayerList() -> Element {
    let state = use_app_state();
    let players = state.players.read();
    let notice = state.player_list_notice.read();

    rsx! {
        section { class: "player-list",
            h2 { "Online Players" }
            if let Some(notice) = notice.as_deref() {
                div { class: "player-list-notice", "{notice}" }
            }
            ul {
                for name in players.iter() {
                    li {
                        key: "{name}",
                        class: "player-entry",
                        onclick: {
                            let name = name.clone();
                            move |_| open_player_detail(state, name.clone())
                        },
                        "{name}"
                    }
                }
            }
        }
    }
}
