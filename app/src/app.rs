//! Root component, shared state and the polling driver.
//!
//! All refresh activity is funnelled through one 5s driver tick that
//! asks the scheduler which feeds are due; user actions (selecting a
//! server, opening a player) trigger forced refreshes outside the
//! schedule. Every in-flight request is guarded by an epoch so a slow
//! response for an abandoned context can never overwrite newer state.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, info, warn};

use playerdash_core::{
    ConfigMapping, DRIVER_TICK_MS, EpochCounter, PLAYER_LIST_RETRY_MS, PollScheduler,
    SERVER_LIST_RETRY_MS, ViewState, load_config_tables,
};
use playerdash_types::{ItemStack, PlayerDetail, ServerEntry};

use crate::api;
use crate::components::{DetailPanel, ItemModal, PlayerList, ServerSelector};
use crate::fetcher::WebFetcher;

static CSS: Asset = asset!("/assets/styles.css");

/// Delay before the catch-up player list refresh after closing the
/// detail panel, so the close itself settles first.
const CLOSE_CATCH_UP_MS: u32 = 500;

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Every signal the dashboard shares, provided via context. Signals
/// are `Copy`, so the whole bundle moves freely into async tasks.
#[derive(Clone, Copy)]
pub struct AppState {
    pub mapping: Signal<ConfigMapping>,
    pub view: Signal<ViewState>,
    pub scheduler: Signal<PollScheduler>,
    pub player_epochs: Signal<EpochCounter>,
    pub detail_epochs: Signal<EpochCounter>,

    pub servers: Signal<Vec<ServerEntry>>,
    pub total_online: Signal<i64>,
    pub current_server: Signal<Option<String>>,
    pub server_list_error: Signal<Option<String>>,

    pub players: Signal<Vec<String>>,
    pub player_list_notice: Signal<Option<String>>,

    pub selected_player: Signal<Option<String>>,
    pub detail: Signal<Option<PlayerDetail>>,
    pub detail_status: Signal<Option<String>>,

    pub modal_item: Signal<Option<ItemStack>>,
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

// ─── Server list ────────────────────────────────────────────────────

async fn try_refresh_server_list(mut state: AppState) -> Result<(), playerdash_core::ApiError> {
    state.scheduler.write().mark_server_list(now_ms());
    let response = api::get_servers().await?;

    state.total_online.set(response.total_player_count());
    let populated = response.populated();
    state.server_list_error.set(None);

    let had_selection = state.current_server.peek().is_some();
    state.servers.set(populated.clone());

    // First successful load selects the first populated server so the
    // dashboard shows data without a click.
    if !had_selection {
        if let Some(first) = populated.first() {
            let name = first.name.clone();
            info!(server = %name, "auto-selecting first populated server");
            select_server(state, name);
        }
    }
    Ok(())
}

/// Refresh the server list, retrying once after a fixed delay on
/// failure. The retry itself never chains another retry.
pub async fn refresh_server_list(mut state: AppState) {
    if let Err(err) = try_refresh_server_list(state).await {
        warn!(%err, "server list refresh failed");
        state
            .server_list_error
            .set(Some(format!("Failed to load server list: {err}")));
        spawn(async move {
            TimeoutFuture::new(SERVER_LIST_RETRY_MS).await;
            if let Err(err) = try_refresh_server_list(state).await {
                warn!(%err, "server list retry failed");
                state
                    .server_list_error
                    .set(Some(format!("Failed to load server list: {err}")));
            }
        });
    }
}

// ─── Player list ────────────────────────────────────────────────────

/// One player list request against a fixed server. Results are applied
/// only while the request's epoch is still current.
async fn player_list_request(
    mut state: AppState,
    server: String,
) -> Result<(), playerdash_core::ApiError> {
    let epoch = state.player_epochs.write().begin();
    state.scheduler.write().mark_player_list(now_ms());
    if state.players.peek().is_empty() {
        state
            .player_list_notice
            .set(Some("Loading players...".to_string()));
    }

    match api::get_players(&server).await {
        Ok(response) => {
            if !state.player_epochs.peek().is_current(epoch) {
                debug!(server = %server, "dropping stale player list response");
                return Ok(());
            }
            let names: Vec<String> = response
                .players
                .iter()
                .map(|p| p.name().to_string())
                .collect();
            state.player_list_notice.set(if names.is_empty() {
                Some("No players online on this server".to_string())
            } else {
                None
            });
            state.players.set(names);
            Ok(())
        }
        Err(err) => {
            if !state.player_epochs.peek().is_current(epoch) {
                debug!(server = %server, "dropping stale player list failure");
                return Ok(());
            }
            Err(err)
        }
    }
}

/// Refresh the player list for the current server. On failure one
/// retry is scheduled, and it only fires if the same server is still
/// selected and no detail panel has opened in the meantime.
pub async fn refresh_player_list(mut state: AppState) {
    let Some(server) = state.current_server.peek().clone() else {
        state.players.write().clear();
        state
            .player_list_notice
            .set(Some("Select a server first".to_string()));
        return;
    };

    if let Err(err) = player_list_request(state, server.clone()).await {
        warn!(%err, server = %server, "player list refresh failed");
        state
            .player_list_notice
            .set(Some(format!("Failed to load player list: {err}")));
        spawn(async move {
            TimeoutFuture::new(PLAYER_LIST_RETRY_MS).await;
            let context_live = state.current_server.peek().as_deref() == Some(server.as_str())
                && !state.view.peek().viewing_detail();
            if !context_live {
                debug!(server = %server, "dropping player list retry, context changed");
                return;
            }
            if let Err(err) = player_list_request(state, server.clone()).await {
                warn!(%err, server = %server, "player list retry failed");
                state
                    .player_list_notice
                    .set(Some(format!("Failed to load player list: {err}")));
            }
        });
    }
}

// ─── User actions ───────────────────────────────────────────────────

/// Switch servers: closes any open detail, marks the interaction and
/// forces an immediate player list refresh for the new server.
pub fn select_server(mut state: AppState, name: String) {
    state.view.write().close_detail();
    state.detail.set(None);
    state.selected_player.set(None);
    state.detail_status.set(None);
    state.modal_item.set(None);

    // Invalidate in-flight responses for the old server before the
    // replacement request is even issued; an already-settled response
    // could otherwise apply between here and the spawned task running.
    state.player_epochs.write().begin();
    state.detail_epochs.write().begin();

    state.players.write().clear();
    state.current_server.set(Some(name));
    state.view.write().note_interaction(now_ms());

    spawn(async move {
        refresh_player_list(state).await;
    });
}

/// Open the detail panel for a player and load their data. Polling of
/// both feeds is suspended while the panel is open.
pub fn open_player_detail(mut state: AppState, player: String) {
    state.view.write().open_detail();
    state.selected_player.set(Some(player.clone()));
    state.detail.set(None);
    state
        .detail_status
        .set(Some("Loading player info...".to_string()));

    spawn(async move {
        let server = state.current_server.peek().clone();
        let epoch = state.detail_epochs.write().begin();
        let result = api::get_player_detail(&player, server.as_deref()).await;
        if !state.detail_epochs.peek().is_current(epoch) {
            debug!(player = %player, "dropping stale player detail response");
            return;
        }
        match result {
            Ok(detail) => {
                if let Some(message) = &detail.error {
                    state
                        .detail_status
                        .set(Some(format!("Failed to load player info: {message}")));
                } else {
                    state.detail_status.set(None);
                    state.detail.set(Some(detail));
                }
            }
            Err(err) => {
                warn!(%err, player = %player, "player detail load failed");
                state
                    .detail_status
                    .set(Some(format!("Failed to load player info: {err}")));
            }
        }
    });
}

/// Close the detail panel and, shortly after, refresh the player list
/// if it went stale while polling was suspended.
pub fn close_player_detail(mut state: AppState) {
    state.view.write().close_detail();
    state.detail.set(None);
    state.selected_player.set(None);
    state.detail_status.set(None);
    state.modal_item.set(None);

    // A late detail response must not repopulate the closed panel.
    state.detail_epochs.write().begin();

    spawn(async move {
        TimeoutFuture::new(CLOSE_CATCH_UP_MS).await;
        if state.view.peek().viewing_detail() {
            return;
        }
        if state.scheduler.peek().player_list_overdue(now_ms()) {
            refresh_player_list(state).await;
        }
    });
}

// ─── Root component ─────────────────────────────────────────────────

#[component]
pub fn App() -> Element {
    let state = use_context_provider(|| AppState {
        mapping: Signal::new(ConfigMapping::new()),
        view: Signal::new(ViewState::new()),
        scheduler: Signal::new(PollScheduler::new()),
        player_epochs: Signal::new(EpochCounter::new()),
        detail_epochs: Signal::new(EpochCounter::new()),
        servers: Signal::new(Vec::new()),
        total_online: Signal::new(0),
        current_server: Signal::new(None),
        server_list_error: Signal::new(None),
        players: Signal::new(Vec::new()),
        player_list_notice: Signal::new(Some("Loading server list...".to_string())),
        selected_player: Signal::new(None),
        detail: Signal::new(None),
        detail_status: Signal::new(None),
        modal_item: Signal::new(None),
    });

    // Startup: resolve the icon/translation tables, then do the first
    // server list refresh. The dashboard works without the tables, so
    // a resolver miss only logs.
    use_future(move || async move {
        let mut state = state;
        let mut mapping = ConfigMapping::new();
        match load_config_tables(&WebFetcher, &mut mapping).await {
            Ok(()) => state.mapping.set(mapping),
            Err(err) => warn!(%err, "config tables unavailable, using defaults"),
        }
        refresh_server_list(state).await;
    });

    // The driver: a single coarse tick that consults the scheduler.
    // Refreshes are spawned so a slow request never delays the tick.
    use_future(move || async move {
        loop {
            TimeoutFuture::new(DRIVER_TICK_MS).await;
            let now = now_ms();
            let due = {
                let view = state.view.peek();
                state.scheduler.peek().due(&view, now)
            };
            if due.server_list {
                spawn(async move {
                    refresh_server_list(state).await;
                });
            }
            if due.player_list && state.current_server.peek().is_some() {
                spawn(async move {
                    refresh_player_list(state).await;
                });
            }
        }
    });

    let mut view = state.view;
    let viewing_detail = state.view.read().viewing_detail();

    rsx! {
        document::Stylesheet { href: CSS }
        div {
            class: "dashboard",
            onscroll: move |_| view.write().note_interaction(now_ms()),
            ontouchstart: move |_| view.write().note_interaction(now_ms()),
            ontouchmove: move |_| view.write().note_interaction(now_ms()),

            header { class: "dashboard-header",
                h1 { "Player Dashboard" }
                span { class: "total-online", "Online: {state.total_online}" }
            }

            ServerSelector {}

            if viewing_detail {
                DetailPanel {}
            } else {
                PlayerList {}
            }

            ItemModal {}
        }
    }
}
