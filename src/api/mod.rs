//! HTTP client for the clip service.
//!
//! Thin request/response wrappers over the service's JSON API. Sessions are
//! cookie-based: the browser attaches them when fetch runs with credentials
//! included, and the native client keeps its own cookie store.

pub mod models;

pub use models::*;

use once_cell::sync::Lazy;
use serde::Serialize;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(build_client);

#[cfg(target_arch = "wasm32")]
const API_URL: &str = "/api";
#[cfg(not(target_arch = "wasm32"))]
const API_URL: &str = "http://localhost:3000/api";

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

fn api_url(path: &str) -> String {
    format!("{API_URL}{path}")
}

// On the web the session cookie only travels when the request opts into
// credentials; natively the shared client's cookie store covers it.
fn with_credentials(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        request.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        request
    }
}

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn get_clips() -> Result<Vec<Clip>, String> {
    let response = with_credentials(HTTP_CLIENT.get(api_url("/clips")))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() == reqwest::StatusCode::NO_CONTENT {
        return Ok(Vec::new());
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn get_clip(clip_id: &str) -> Result<Option<Clip>, String> {
    let url = api_url(&format!("/clips/{}", urlencoding::encode(clip_id)));
    let response = with_credentials(HTTP_CLIENT.get(url))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Ok(None);
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn get_user_clips(user_id: &str) -> Result<Vec<Clip>, String> {
    let url = api_url(&format!("/users/{}/clips", urlencoding::encode(user_id)));
    let response = with_credentials(HTTP_CLIENT.get(url))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status() == reqwest::StatusCode::NO_CONTENT {
        return Ok(Vec::new());
    }
    response.json().await.map_err(|e| e.to_string())
}

/// The signed-in user, or `None` when the session is missing or expired.
pub async fn get_current_user() -> Result<Option<User>, String> {
    let response = with_credentials(HTTP_CLIENT.get(api_url("/users/me")))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Ok(None);
    }
    response.json().await.map_err(|e| e.to_string())
}

pub async fn register(username: &str, password: &str) -> Result<bool, String> {
    let response = with_credentials(HTTP_CLIENT.post(api_url("/auth/register")))
        .json(&AuthRequest { username, password })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.status().is_success())
}

pub async fn login(username: &str, password: &str) -> Result<bool, String> {
    let response = with_credentials(HTTP_CLIENT.post(api_url("/auth/login")))
        .json(&AuthRequest { username, password })
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.status().is_success())
}

pub async fn logout() -> Result<bool, String> {
    let response = with_credentials(HTTP_CLIENT.post(api_url("/auth/logout")))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(response.status().is_success())
}
