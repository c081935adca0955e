use dioxus::prelude::*;

use crate::app::{refresh_server_list, select_server, use_app_state};

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Collapsible server picker. Only populated servers are listed; the
/// header shows the current selection and doubles as the toggle.
#[component]
pub fn ServerSelector() -> Element {
    let state = use_app_state();
    let mut view = state.view;
    let mut open = use_signal(|| false);

    let servers = state.servers.read();
    let current = state.current_server.read();
    let header = match current.as_deref() {
        Some(name) => format!("Server: {name}"),
        None => "Select a server".to_string(),
    };

    rsx! {
        div { class: "server-selector",
            div {
                class: "server-selector-header",
                onclick: move |_| {
                    view.write().note_interaction(now_ms());
                    // an empty list usually means the first load failed
                    if state.servers.peek().is_empty() {
                        spawn(async move {
                            refresh_server_list(state).await;
                        });
                    }
                    open.toggle();
                },
                span { "{header}" }
                span { class: if open() { "chevron open" } else { "chevron" } }
            }
            if open() {
                ul { class: "server-list",
                    if servers.is_empty() {
                        li { class: "server-list-empty",
                            if let Some(err) = state.server_list_error.read().as_deref() {
                                "{err}"
                            } else {
                                "No populated servers"
                            }
                        }
                    }
                    for server in servers.iter() {
                        li {
                            key: "{server.name}",
                            class: if current.as_deref() == Some(server.name.as_str()) {
                                "server-entry active"
                            } else {
                                "server-entry"
                            },
                            onclick: {
                                let name = server.name.clone();
                                move |_| {
                                    open.set(false);
                                    select_server(state, name.clone());
                                }
                            },
                            span { class: "server-name", "{server.name}" }
                            span { class: "server-count", "{server.player_count}" }
                        }
                    }
                }
            }
        }
    }
}
