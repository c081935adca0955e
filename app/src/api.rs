//! Status-API client.
//!
//! Thin typed wrappers around one fetch helper. Every call is a GET
//! with explicit Accept/no-cache headers, raced against the fixed
//! request timeout. The timeout is tied to an AbortController so a
//! late request is actually cancelled, not just ignored. Failures are
//! classified in stages: transport/timeout, HTTP status, empty body,
//! JSON parse.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use playerdash_core::{ApiError, REQUEST_TIMEOUT_MS};
use playerdash_types::{PlayerDetail, PlayerListResponse, ServerListResponse};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AbortController, Headers, Request, RequestCache, RequestCredentials, RequestInit, RequestMode,
    Response,
};

fn transport_error() -> ApiError {
    ApiError::Network { status: None }
}

/// Fetch a URL and return its body text, or a staged `ApiError`.
pub async fn fetch_body(url: &str) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(transport_error)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::SameOrigin);
    init.set_cache(RequestCache::NoCache);
    init.set_credentials(RequestCredentials::SameOrigin);

    let headers = Headers::new().map_err(|_| transport_error())?;
    headers
        .set("Accept", "application/json")
        .map_err(|_| transport_error())?;
    init.set_headers(&headers);

    let controller = AbortController::new().ok();
    if let Some(controller) = &controller {
        init.set_signal(Some(&controller.signal()));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(|_| transport_error())?;

    // Abort the underlying fetch when the timeout elapses. The flag
    // lets the error path distinguish our abort from a real network
    // failure.
    let timed_out = Rc::new(Cell::new(false));
    let settled = Rc::new(Cell::new(false));
    {
        let timed_out = Rc::clone(&timed_out);
        let settled = Rc::clone(&settled);
        let controller = controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(REQUEST_TIMEOUT_MS).await;
            if !settled.get() {
                timed_out.set(true);
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    let response = JsFuture::from(window.fetch_with_request(&request)).await;
    let response = match response {
        Ok(value) => value,
        Err(_) if timed_out.get() => return Err(ApiError::Timeout),
        Err(_) => return Err(transport_error()),
    };
    let response: Response = response.dyn_into().map_err(|_| transport_error())?;

    if !response.ok() {
        settled.set(true);
        return Err(ApiError::Network {
            status: Some(response.status()),
        });
    }

    let text_promise = response.text().map_err(|_| transport_error())?;
    let text = JsFuture::from(text_promise).await;
    settled.set(true);
    let text = match text {
        Ok(value) => value.as_string().unwrap_or_default(),
        Err(_) if timed_out.get() => return Err(ApiError::Timeout),
        Err(_) => return Err(transport_error()),
    };

    if text.trim().is_empty() {
        return Err(ApiError::EmptyResponse);
    }
    Ok(text)
}

/// Fetch and decode a JSON endpoint.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let body = fetch_body(url).await?;
    serde_json::from_str(&body).map_err(|err| ApiError::Parse(err.to_string()))
}

fn encode(component: &str) -> String {
    String::from(js_sys::encode_uri_component(component))
}

/// `GET /api/servers`
pub async fn get_servers() -> Result<ServerListResponse, ApiError> {
    fetch_json("/api/servers").await
}

/// `GET /api/players?server=NAME`
pub async fn get_players(server: &str) -> Result<PlayerListResponse, ApiError> {
    fetch_json(&format!("/api/players?server={}", encode(server))).await
}

/// `GET /api/player/{name}?server=NAME`
pub async fn get_player_detail(
    player: &str,
    server: Option<&str>,
) -> Result<PlayerDetail, ApiError> {
    let mut url = format!("/api/player/{}", encode(player));
    if let Some(server) = server {
        url.push_str(&format!("?server={}", encode(server)));
    }
    fetch_json(&url).await
}
