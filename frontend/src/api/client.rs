use crate::env_variable_utils::BACKEND_URL;
use crate::models::ErrorResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

/// Outcome of one backend call. `status` is 0 when the request never got an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub status: u16,
}

impl<T> ApiResponse<T> {
    pub fn ok(status: u16, data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status,
        }
    }

    pub fn failed(status: u16, error: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
            status,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (_, Some(error)) => Err(error),
            (None, None) => Err(format!("Empty response with status: {}", self.status)),
        }
    }
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", &*BACKEND_URL, path)
}

/// Thumbnails and media files come back either absolute or relative to the backend.
pub fn media_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        api_url(path)
    }
}

pub(crate) fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(target_arch = "wasm32")]
fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    find_cookie(&cookies, "csrftoken")
}

#[cfg(not(target_arch = "wasm32"))]
fn csrf_token() -> Option<String> {
    None
}

fn prepare(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include);

    match csrf_token() {
        Some(token) => builder.header("X-CSRFToken", &token),
        None => builder,
    }
}

pub(crate) fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => error_response.message,
        Err(_) if body.trim().is_empty() => format!("Request failed with status: {status}"),
        Err(_) => format!("Request failed ({status}): {body}"),
    }
}

async fn failed_response<T>(response: Response) -> ApiResponse<T> {
    let status = response.status();
    let url = response.url();
    let text = response.text().await.unwrap_or_default();
    let message = error_message(status, &text);
    log::warn!("{url} answered {status}: {message}");
    ApiResponse::failed(status, message)
}

fn transport_error<T>(url: &str, error: gloo_net::Error) -> ApiResponse<T> {
    log::error!("Failed to reach {url}: {error}");
    ApiResponse::failed(0, format!("Network error: {error}"))
}

pub async fn api_get<T: DeserializeOwned>(path: &str) -> ApiResponse<T> {
    let url = api_url(path);
    log::debug!("GET {url}");

    let response = match prepare(Request::get(&url)).send().await {
        Ok(response) => response,
        Err(e) => return transport_error(&url, e),
    };

    if !response.ok() {
        return failed_response(response).await;
    }

    let status = response.status();
    match response.json::<T>().await {
        Ok(data) => ApiResponse::ok(status, data),
        Err(e) => {
            log::error!("Malformed body from {url}: {e}");
            ApiResponse::failed(status, format!("Failed to parse response: {e}"))
        }
    }
}

/// POSTs `body` as JSON; only the status of the answer is kept.
pub async fn api_post<B: Serialize>(path: &str, body: &B) -> ApiResponse<()> {
    let url = api_url(path);
    log::debug!("POST {url}");

    let request = match prepare(Request::post(&url)).json(body) {
        Ok(request) => request,
        Err(e) => return ApiResponse::failed(0, format!("Request error: {e}")),
    };

    match request.send().await {
        Ok(response) if response.ok() => ApiResponse::ok(response.status(), ()),
        Ok(response) => failed_response(response).await,
        Err(e) => transport_error(&url, e),
    }
}
